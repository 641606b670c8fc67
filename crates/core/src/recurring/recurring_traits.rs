//! Recurring slot repository and service traits.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::recurring_model::{
    AnchorUpdate, NewRecurringSlot, Occurrence, RecurringSlot, RecurringSlotUpdate,
};
use crate::errors::Result;

/// Trait defining the contract for RecurringSlot repository operations.
///
/// Every write is a single statement; callers get back the number of rows it
/// touched so that "nothing matched" stays observable.
#[async_trait]
pub trait RecurringSlotRepositoryTrait: Send + Sync {
    /// Slots on one calendar ordered by day of week, then start time.
    fn list_for_calendar(&self, calendar_id: &str) -> Result<Vec<RecurringSlot>>;

    /// Every slot across calendars, in the same order as `list_for_calendar`.
    fn list_all(&self) -> Result<Vec<RecurringSlot>>;

    async fn insert(&self, slot: RecurringSlot) -> Result<RecurringSlot>;

    /// Renames and replaces participants on every slot of `calendar_id` titled `event_title`.
    async fn update_by_title(
        &self,
        calendar_id: &str,
        event_title: &str,
        new_title: &str,
        participant_names: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<usize>;

    /// Renames and replaces participants on one slot of `calendar_id`.
    async fn update_by_id(
        &self,
        calendar_id: &str,
        slot_id: &str,
        new_title: &str,
        participant_names: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<usize>;

    /// Deletes the slot only when it belongs to `calendar_id`.
    async fn delete(&self, calendar_id: &str, slot_id: &str) -> Result<usize>;

    /// Overwrites the anchor of a slot.
    async fn set_anchor(&self, slot_id: &str, event_start_date: NaiveDateTime) -> Result<usize>;
}

/// Trait defining the contract for RecurringSlot service operations.
#[async_trait]
pub trait RecurringSlotServiceTrait: Send + Sync {
    fn get_slots(&self, calendar_id: &str) -> Result<Vec<RecurringSlot>>;
    async fn create_slot(&self, new_slot: NewRecurringSlot) -> Result<RecurringSlot>;
    async fn update_slots(&self, update: RecurringSlotUpdate) -> Result<usize>;
    async fn delete_slot(&self, calendar_id: &str, slot_id: &str) -> Result<usize>;
    async fn advance_anchor(&self, update: AnchorUpdate) -> Result<usize>;

    /// Concrete occurrences of a calendar's slots for `weeks` weeks starting at `from`.
    fn get_occurrences(
        &self,
        calendar_id: &str,
        from: NaiveDate,
        weeks: u32,
    ) -> Result<Vec<Occurrence>>;
}

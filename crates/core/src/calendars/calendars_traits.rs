//! Calendar repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::calendars_model::{Calendar, CalendarDetails, CalendarUpdate, NewCalendar};
use crate::errors::Result;
use crate::participants::Participant;

/// Trait defining the contract for Calendar repository operations.
#[async_trait]
pub trait CalendarRepositoryTrait: Send + Sync {
    /// Lists calendars in creation order.
    fn list(&self) -> Result<Vec<Calendar>>;

    /// Retrieves a calendar by its ID.
    fn get_by_id(&self, calendar_id: &str) -> Result<Calendar>;

    async fn insert(&self, calendar: Calendar) -> Result<Calendar>;

    async fn update(
        &self,
        calendar_id: &str,
        name: &str,
        color: &str,
        updated_at: NaiveDateTime,
    ) -> Result<Calendar>;

    /// Deletes a calendar; links and slots go with it.
    async fn delete(&self, calendar_id: &str) -> Result<usize>;

    /// Every (calendar id, participant) link, participants ordered by name.
    fn list_members(&self) -> Result<Vec<(String, Participant)>>;

    /// Finds or creates the participant named `participant_name` and links it.
    ///
    /// Both steps run in one transaction and tolerate an existing participant
    /// or link.
    async fn link_participant(
        &self,
        calendar_id: &str,
        participant_name: String,
    ) -> Result<Participant>;

    async fn unlink_participant(&self, calendar_id: &str, participant_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Calendar service operations.
#[async_trait]
pub trait CalendarServiceTrait: Send + Sync {
    fn get_calendars(&self) -> Result<Vec<CalendarDetails>>;
    async fn create_calendar(&self, new_calendar: NewCalendar) -> Result<Calendar>;
    async fn update_calendar(&self, update: CalendarUpdate) -> Result<Calendar>;
    async fn delete_calendar(&self, calendar_id: &str) -> Result<usize>;
    async fn add_participant(&self, calendar_id: &str, participant_name: &str)
        -> Result<Participant>;
    async fn remove_participant(&self, calendar_id: &str, participant_id: &str) -> Result<usize>;
}

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::recurrence::materialize;
use super::recurring_model::{
    encode_participant_names, AnchorUpdate, NewRecurringSlot, Occurrence, RecurringSlot,
    RecurringSlotUpdate,
};
use super::recurring_traits::{RecurringSlotRepositoryTrait, RecurringSlotServiceTrait};
use crate::calendars::CalendarRepositoryTrait;
use crate::constants::{DEFAULT_RECURRING_TITLE, MAX_OCCURRENCE_WEEKS};
use crate::errors::{Result, ValidationError};

/// Service owning the weekly recurrence rules of calendars.
pub struct RecurringSlotService {
    repository: Arc<dyn RecurringSlotRepositoryTrait>,
    calendar_repository: Arc<dyn CalendarRepositoryTrait>,
}

impl RecurringSlotService {
    pub fn new(
        repository: Arc<dyn RecurringSlotRepositoryTrait>,
        calendar_repository: Arc<dyn CalendarRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            calendar_repository,
        }
    }
}

#[async_trait]
impl RecurringSlotServiceTrait for RecurringSlotService {
    fn get_slots(&self, calendar_id: &str) -> Result<Vec<RecurringSlot>> {
        self.repository.list_for_calendar(calendar_id)
    }

    /// Creates a slot anchored at the creation time.
    ///
    /// The anchor is not moved to the next matching weekday; `materialize`
    /// does that alignment when occurrences are computed.
    async fn create_slot(&self, new_slot: NewRecurringSlot) -> Result<RecurringSlot> {
        new_slot.validate()?;
        let calendar = self.calendar_repository.get_by_id(&new_slot.calendar_id)?;

        let now = Utc::now().naive_utc();
        let event_title = new_slot
            .event_title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RECURRING_TITLE.to_string());

        let slot = RecurringSlot {
            id: Uuid::new_v4().to_string(),
            calendar_id: calendar.id,
            day_of_week: new_slot.day_of_week,
            start_minutes: new_slot.start_minutes,
            end_minutes: new_slot.end_minutes,
            event_title,
            event_start_date: now,
            starts_on: now,
            ends_on: None,
            participant_names: None,
            color: calendar.color,
            created_at: now,
            updated_at: now,
        };
        let created = self.repository.insert(slot).await?;
        info!(
            "Created recurring slot {} on calendar {} (day {}, {}-{})",
            created.id,
            created.calendar_id,
            created.day_of_week,
            created.start_minutes,
            created.end_minutes
        );
        Ok(created)
    }

    async fn update_slots(&self, update: RecurringSlotUpdate) -> Result<usize> {
        let participant_names = encode_participant_names(&update.participants)?;
        let now = Utc::now().naive_utc();

        let updated = match update.slot_id.as_deref() {
            Some(slot_id) => {
                self.repository
                    .update_by_id(
                        &update.calendar_id,
                        slot_id,
                        &update.new_title,
                        participant_names,
                        now,
                    )
                    .await?
            }
            None => {
                self.repository
                    .update_by_title(
                        &update.calendar_id,
                        &update.event_title,
                        &update.new_title,
                        participant_names,
                        now,
                    )
                    .await?
            }
        };
        debug!(
            "Updated {} recurring slot(s) titled '{}' on calendar {}",
            updated, update.event_title, update.calendar_id
        );
        Ok(updated)
    }

    async fn delete_slot(&self, calendar_id: &str, slot_id: &str) -> Result<usize> {
        let deleted = self.repository.delete(calendar_id, slot_id).await?;
        if deleted == 0 {
            debug!(
                "No recurring slot {} on calendar {}; nothing deleted",
                slot_id, calendar_id
            );
        }
        Ok(deleted)
    }

    async fn advance_anchor(&self, update: AnchorUpdate) -> Result<usize> {
        self.repository
            .set_anchor(&update.slot_id, update.event_start_date)
            .await
    }

    fn get_occurrences(
        &self,
        calendar_id: &str,
        from: NaiveDate,
        weeks: u32,
    ) -> Result<Vec<Occurrence>> {
        if weeks == 0 || weeks > MAX_OCCURRENCE_WEEKS {
            return Err(ValidationError::OutOfRange {
                field: "weeks".to_string(),
                value: i64::from(weeks),
            }
            .into());
        }
        let until = from
            .checked_add_signed(Duration::weeks(i64::from(weeks)))
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "from".to_string(),
                value: i64::from(from.year()),
            })?;
        let mut occurrences: Vec<Occurrence> = self
            .repository
            .list_for_calendar(calendar_id)?
            .iter()
            .flat_map(|slot| materialize(slot, from, until))
            .collect();
        occurrences.sort_by(|a, b| a.start.cmp(&b.start));
        Ok(occurrences)
    }
}

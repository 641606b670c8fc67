use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::calendars_model::{
    resolve_color, Calendar, CalendarDetails, CalendarUpdate, NewCalendar,
};
use super::calendars_traits::{CalendarRepositoryTrait, CalendarServiceTrait};
use crate::errors::Result;
use crate::participants::{validate_participant_name, Participant};
use crate::recurring::{RecurringSlot, RecurringSlotRepositoryTrait};

/// Service for managing calendars and their participant links.
pub struct CalendarService {
    repository: Arc<dyn CalendarRepositoryTrait>,
    recurring_repository: Arc<dyn RecurringSlotRepositoryTrait>,
}

impl CalendarService {
    pub fn new(
        repository: Arc<dyn CalendarRepositoryTrait>,
        recurring_repository: Arc<dyn RecurringSlotRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            recurring_repository,
        }
    }
}

#[async_trait]
impl CalendarServiceTrait for CalendarService {
    fn get_calendars(&self) -> Result<Vec<CalendarDetails>> {
        let calendars = self.repository.list()?;

        let mut members: HashMap<String, Vec<Participant>> = HashMap::new();
        for (calendar_id, participant) in self.repository.list_members()? {
            members.entry(calendar_id).or_default().push(participant);
        }

        let mut slots: HashMap<String, Vec<RecurringSlot>> = HashMap::new();
        for slot in self.recurring_repository.list_all()? {
            slots.entry(slot.calendar_id.clone()).or_default().push(slot);
        }

        Ok(calendars
            .into_iter()
            .map(|calendar| CalendarDetails {
                members: members.remove(&calendar.id).unwrap_or_default(),
                recurring_slots: slots.remove(&calendar.id).unwrap_or_default(),
                calendar,
            })
            .collect())
    }

    async fn create_calendar(&self, new_calendar: NewCalendar) -> Result<Calendar> {
        new_calendar.validate()?;
        let now = Utc::now().naive_utc();
        let calendar = Calendar {
            id: Uuid::new_v4().to_string(),
            name: new_calendar.name.trim().to_string(),
            color: resolve_color(new_calendar.color.as_deref()),
            created_at: now,
            updated_at: now,
        };
        let created = self.repository.insert(calendar).await?;
        info!("Created calendar {} ({})", created.id, created.name);
        Ok(created)
    }

    async fn update_calendar(&self, update: CalendarUpdate) -> Result<Calendar> {
        update.validate()?;
        let color = resolve_color(update.color.as_deref());
        self.repository
            .update(
                &update.id,
                update.name.trim(),
                &color,
                Utc::now().naive_utc(),
            )
            .await
    }

    async fn delete_calendar(&self, calendar_id: &str) -> Result<usize> {
        let deleted = self.repository.delete(calendar_id).await?;
        info!("Deleted calendar {} ({} row(s))", calendar_id, deleted);
        Ok(deleted)
    }

    async fn add_participant(
        &self,
        calendar_id: &str,
        participant_name: &str,
    ) -> Result<Participant> {
        let name = validate_participant_name(participant_name)?;
        // Surface a missing calendar as not-found rather than a constraint error.
        self.repository.get_by_id(calendar_id)?;
        let participant = self
            .repository
            .link_participant(calendar_id, name)
            .await?;
        debug!(
            "Linked participant {} ({}) to calendar {}",
            participant.id, participant.name, calendar_id
        );
        Ok(participant)
    }

    async fn remove_participant(&self, calendar_id: &str, participant_id: &str) -> Result<usize> {
        self.repository
            .unlink_participant(calendar_id, participant_id)
            .await
    }
}

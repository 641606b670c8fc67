//! In-memory repositories shared by the service tests.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Mutex;

use crate::calendars::{Calendar, CalendarRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::participants::Participant;
use crate::recurring::{RecurringSlot, RecurringSlotRepositoryTrait};

pub fn timestamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[derive(Default)]
pub struct InMemoryCalendars {
    pub calendars: Mutex<Vec<Calendar>>,
    pub participants: Mutex<Vec<Participant>>,
    pub links: Mutex<Vec<(String, String)>>,
}

impl InMemoryCalendars {
    pub fn with_calendar(id: &str, color: &str) -> Self {
        let repo = Self::default();
        repo.calendars.lock().unwrap().push(Calendar {
            id: id.to_string(),
            name: format!("Calendar {id}"),
            color: color.to_string(),
            created_at: timestamp(1, 9),
            updated_at: timestamp(1, 9),
        });
        repo
    }
}

#[async_trait]
impl CalendarRepositoryTrait for InMemoryCalendars {
    fn list(&self) -> Result<Vec<Calendar>> {
        Ok(self.calendars.lock().unwrap().clone())
    }

    fn get_by_id(&self, calendar_id: &str) -> Result<Calendar> {
        self.calendars
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == calendar_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(calendar_id.to_string())))
    }

    async fn insert(&self, calendar: Calendar) -> Result<Calendar> {
        self.calendars.lock().unwrap().push(calendar.clone());
        Ok(calendar)
    }

    async fn update(
        &self,
        calendar_id: &str,
        name: &str,
        color: &str,
        updated_at: NaiveDateTime,
    ) -> Result<Calendar> {
        let mut calendars = self.calendars.lock().unwrap();
        let calendar = calendars
            .iter_mut()
            .find(|c| c.id == calendar_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(calendar_id.to_string())))?;
        calendar.name = name.to_string();
        calendar.color = color.to_string();
        calendar.updated_at = updated_at;
        Ok(calendar.clone())
    }

    async fn delete(&self, calendar_id: &str) -> Result<usize> {
        let mut calendars = self.calendars.lock().unwrap();
        let before = calendars.len();
        calendars.retain(|c| c.id != calendar_id);
        self.links.lock().unwrap().retain(|(c, _)| c != calendar_id);
        Ok(before - calendars.len())
    }

    fn list_members(&self) -> Result<Vec<(String, Participant)>> {
        let participants = self.participants.lock().unwrap();
        let mut members: Vec<(String, Participant)> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(calendar_id, participant_id)| {
                participants
                    .iter()
                    .find(|p| &p.id == participant_id)
                    .map(|p| (calendar_id.clone(), p.clone()))
            })
            .collect();
        members.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        Ok(members)
    }

    async fn link_participant(
        &self,
        calendar_id: &str,
        participant_name: String,
    ) -> Result<Participant> {
        let mut participants = self.participants.lock().unwrap();
        let participant = match participants.iter().find(|p| p.name == participant_name) {
            Some(p) => p.clone(),
            None => {
                let p = Participant {
                    id: format!("p-{}", participants.len() + 1),
                    name: participant_name,
                    created_at: timestamp(2, 9),
                };
                participants.push(p.clone());
                p
            }
        };
        let mut links = self.links.lock().unwrap();
        let link = (calendar_id.to_string(), participant.id.clone());
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(participant)
    }

    async fn unlink_participant(&self, calendar_id: &str, participant_id: &str) -> Result<usize> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|(c, p)| !(c == calendar_id && p == participant_id));
        Ok(before - links.len())
    }
}

#[derive(Default)]
pub struct InMemorySlots {
    pub slots: Mutex<Vec<RecurringSlot>>,
}

impl InMemorySlots {
    fn sorted(mut slots: Vec<RecurringSlot>) -> Vec<RecurringSlot> {
        slots.sort_by_key(|s| (s.day_of_week, s.start_minutes));
        slots
    }
}

#[async_trait]
impl RecurringSlotRepositoryTrait for InMemorySlots {
    fn list_for_calendar(&self, calendar_id: &str) -> Result<Vec<RecurringSlot>> {
        let slots = self.slots.lock().unwrap();
        Ok(Self::sorted(
            slots
                .iter()
                .filter(|s| s.calendar_id == calendar_id)
                .cloned()
                .collect(),
        ))
    }

    fn list_all(&self) -> Result<Vec<RecurringSlot>> {
        Ok(Self::sorted(self.slots.lock().unwrap().clone()))
    }

    async fn insert(&self, slot: RecurringSlot) -> Result<RecurringSlot> {
        self.slots.lock().unwrap().push(slot.clone());
        Ok(slot)
    }

    async fn update_by_title(
        &self,
        calendar_id: &str,
        event_title: &str,
        new_title: &str,
        participant_names: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<usize> {
        let mut count = 0;
        for slot in self.slots.lock().unwrap().iter_mut() {
            if slot.calendar_id == calendar_id && slot.event_title == event_title {
                slot.event_title = new_title.to_string();
                slot.participant_names = participant_names.clone();
                slot.updated_at = updated_at;
                count += 1;
            }
        }
        Ok(count)
    }

    async fn update_by_id(
        &self,
        calendar_id: &str,
        slot_id: &str,
        new_title: &str,
        participant_names: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<usize> {
        let mut count = 0;
        for slot in self.slots.lock().unwrap().iter_mut() {
            if slot.calendar_id == calendar_id && slot.id == slot_id {
                slot.event_title = new_title.to_string();
                slot.participant_names = participant_names.clone();
                slot.updated_at = updated_at;
                count += 1;
            }
        }
        Ok(count)
    }

    async fn delete(&self, calendar_id: &str, slot_id: &str) -> Result<usize> {
        let mut slots = self.slots.lock().unwrap();
        let before = slots.len();
        slots.retain(|s| !(s.calendar_id == calendar_id && s.id == slot_id));
        Ok(before - slots.len())
    }

    async fn set_anchor(&self, slot_id: &str, event_start_date: NaiveDateTime) -> Result<usize> {
        let mut count = 0;
        for slot in self.slots.lock().unwrap().iter_mut() {
            if slot.id == slot_id {
                slot.event_start_date = event_start_date;
                count += 1;
            }
        }
        Ok(count)
    }
}

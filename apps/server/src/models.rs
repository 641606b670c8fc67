//! Request and response bodies of the HTTP API.
//!
//! Core types stay free of OpenAPI concerns; these mirrors carry the
//! `ToSchema` derives and the camelCase wire names.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use gbti_core::{
    calendars as core_calendars, members as core_members, notices as core_notices,
    notifications as core_notifications, participants as core_participants,
    recurring as core_recurring,
};

/// Accepts RFC 3339 (`2024-03-11T10:00:00.000Z`) or a naive ISO timestamp.
/// Offsets are folded into UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| raw.parse::<NaiveDateTime>())
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

// ===================== Participants =====================

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<core_participants::Participant> for Participant {
    fn from(p: core_participants::Participant) -> Self {
        Self {
            id: p.id,
            name: p.name,
            created_at: p.created_at,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ParticipantsResponse {
    pub participants: Vec<Participant>,
}

// ===================== Recurring slots =====================

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSlot {
    pub id: String,
    pub calendar_id: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub event_title: String,
    pub event_start_date: NaiveDateTime,
    pub starts_on: NaiveDateTime,
    pub ends_on: Option<NaiveDateTime>,
    /// Stored JSON array text, `null` when no participants are recorded.
    pub participant_names: Option<String>,
    /// `participantNames` decoded.
    pub participants: Vec<String>,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_recurring::RecurringSlot> for RecurringSlot {
    fn from(s: core_recurring::RecurringSlot) -> Self {
        let participants = s.participants();
        Self {
            id: s.id,
            calendar_id: s.calendar_id,
            day_of_week: s.day_of_week,
            start_minutes: s.start_minutes,
            end_minutes: s.end_minutes,
            event_title: s.event_title,
            event_start_date: s.event_start_date,
            starts_on: s.starts_on,
            ends_on: s.ends_on,
            participant_names: s.participant_names,
            participants,
            color: s.color,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct SlotsResponse {
    pub slots: Vec<RecurringSlot>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct SlotResponse {
    pub slot: RecurringSlot,
}

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringSlotRequest {
    pub day_of_week: i32,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub event_title: Option<String>,
}

impl NewRecurringSlotRequest {
    pub fn into_core(self, calendar_id: String) -> core_recurring::NewRecurringSlot {
        core_recurring::NewRecurringSlot {
            calendar_id,
            day_of_week: self.day_of_week,
            start_minutes: self.start_minutes,
            end_minutes: self.end_minutes,
            event_title: self.event_title,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSlotUpdateRequest {
    /// Title of the slot(s) to update; used when `slotId` is absent.
    pub event_title: String,
    pub new_title: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub slot_id: Option<String>,
}

impl RecurringSlotUpdateRequest {
    pub fn into_core(self, calendar_id: String) -> core_recurring::RecurringSlotUpdate {
        core_recurring::RecurringSlotUpdate {
            calendar_id,
            slot_id: self.slot_id,
            event_title: self.event_title,
            new_title: self.new_title,
            participants: self.participants,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SlotIdRequest {
    pub slot_id: String,
}

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnchorUpdateRequest {
    pub slot_id: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub event_start_date: NaiveDateTime,
}

impl From<AnchorUpdateRequest> for core_recurring::AnchorUpdate {
    fn from(r: AnchorUpdateRequest) -> Self {
        Self {
            slot_id: r.slot_id,
            event_start_date: r.event_start_date,
        }
    }
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct OccurrenceQuery {
    /// First day of the window; today (UTC) when absent.
    pub from: Option<NaiveDate>,
    /// Window length in weeks, 1 to 52.
    pub weeks: Option<u32>,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub slot_id: String,
    pub calendar_id: String,
    pub title: String,
    pub participants: Vec<String>,
    pub color: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl From<core_recurring::Occurrence> for Occurrence {
    fn from(o: core_recurring::Occurrence) -> Self {
        Self {
            slot_id: o.slot_id,
            calendar_id: o.calendar_id,
            title: o.title,
            participants: o.participants,
            color: o.color,
            start: o.start,
            end: o.end,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct OccurrencesResponse {
    pub occurrences: Vec<Occurrence>,
}

// ===================== Calendars =====================

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_calendars::Calendar> for Calendar {
    fn from(c: core_calendars::Calendar) -> Self {
        Self {
            id: c.id,
            name: c.name,
            color: c.color,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDetails {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Linked participants, alphabetical.
    pub members: Vec<Participant>,
    pub recurring_slots: Vec<RecurringSlot>,
}

impl From<core_calendars::CalendarDetails> for CalendarDetails {
    fn from(d: core_calendars::CalendarDetails) -> Self {
        Self {
            id: d.calendar.id,
            name: d.calendar.name,
            color: d.calendar.color,
            created_at: d.calendar.created_at,
            updated_at: d.calendar.updated_at,
            members: d.members.into_iter().map(Participant::from).collect(),
            recurring_slots: d
                .recurring_slots
                .into_iter()
                .map(RecurringSlot::from)
                .collect(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct CalendarsResponse {
    pub calendars: Vec<CalendarDetails>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct CalendarResponse {
    pub calendar: Calendar,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct NewCalendarRequest {
    pub name: String,
    pub color: Option<String>,
}

impl From<NewCalendarRequest> for core_calendars::NewCalendar {
    fn from(r: NewCalendarRequest) -> Self {
        Self {
            name: r.name,
            color: r.color,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct CalendarUpdateRequest {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

impl From<CalendarUpdateRequest> for core_calendars::CalendarUpdate {
    fn from(r: CalendarUpdateRequest) -> Self {
        Self {
            id: r.id,
            name: r.name,
            color: r.color,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddParticipantRequest {
    pub participant_name: String,
}

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveParticipantRequest {
    pub participant_id: String,
}

// ===================== Notices =====================

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: String,
    pub created_at: NaiveDateTime,
}

impl From<core_notices::Notice> for Notice {
    fn from(n: core_notices::Notice) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            image_url: n.image_url,
            author: n.author,
            created_at: n.created_at,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct NoticesResponse {
    pub notices: Vec<Notice>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct NoticeResponse {
    pub notice: Notice,
}

#[derive(Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewNoticeRequest {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: Option<String>,
}

impl From<NewNoticeRequest> for core_notices::NewNotice {
    fn from(r: NewNoticeRequest) -> Self {
        Self {
            title: r.title,
            content: r.content,
            image_url: r.image_url,
            author: r.author,
        }
    }
}

// ===================== Members =====================

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub part: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_members::Member> for Member {
    fn from(m: core_members::Member) -> Self {
        Self {
            id: m.id,
            name: m.name,
            part: m.part,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct MembersResponse {
    pub members: Vec<Member>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct MemberResponse {
    pub member: Member,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct MemberRequest {
    pub name: String,
    pub part: Option<String>,
}

// ===================== Notifications =====================

#[derive(Deserialize, ToSchema, Debug)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

/// The browser's `PushSubscription.toJSON()` shape.
#[derive(Deserialize, ToSchema, Debug)]
pub struct BrowserSubscription {
    pub endpoint: String,
    pub keys: SubscriptionKeys,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct SubscribeRequest {
    pub subscription: BrowserSubscription,
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub leads: Vec<i32>,
    pub timezone: Option<String>,
}

impl SubscribeRequest {
    pub fn into_core(self, user_agent: Option<String>) -> core_notifications::NewPushSubscription {
        core_notifications::NewPushSubscription {
            endpoint: self.subscription.endpoint,
            p256dh: self.subscription.keys.p256dh,
            auth: self.subscription.keys.auth,
            targets: self.targets,
            leads: self.leads,
            user_agent,
            timezone: self.timezone,
        }
    }
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct UnsubscribeRequest {
    pub endpoint: String,
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VapidKeyResponse {
    pub public_key: String,
}

// ===================== Sessions =====================

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct LoginResponse {
    pub ok: bool,
    /// `admin` or `user`.
    pub role: String,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct SessionResponse {
    /// `admin`, `user`, or `null` without a valid session.
    pub role: Option<String>,
}

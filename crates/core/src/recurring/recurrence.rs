//! Weekly occurrence materialization.
//!
//! A slot recurs every seven days on `day_of_week`. The first occurrence is the
//! first matching date on or after the later of the anchor date and the
//! `starts_on` date; no occurrence falls after `ends_on`.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime};

use super::recurring_model::{Occurrence, RecurringSlot};

/// Weekday of `date` as 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

/// First date on or after `date` that falls on `day_of_week`, `None` past the
/// end of the calendar.
pub fn first_on_or_after(date: NaiveDate, day_of_week: i32) -> Option<NaiveDate> {
    let offset = (day_of_week - weekday_index(date)).rem_euclid(7);
    date.checked_add_days(Days::new(u64::from(offset.unsigned_abs())))
}

fn at_minutes(date: NaiveDate, minutes: i32) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or_default()
}

/// Materializes the occurrences of `slot` whose date lies in `[from, until)`.
pub fn materialize(slot: &RecurringSlot, from: NaiveDate, until: NaiveDate) -> Vec<Occurrence> {
    let base = slot.event_start_date.date().max(slot.starts_on.date());
    let Some(first) = first_on_or_after(base.max(from), slot.day_of_week) else {
        return Vec::new();
    };
    let last = slot.ends_on.map(|d| d.date());
    let participants = slot.participants();

    let mut occurrences = Vec::new();
    let mut date = first;
    while date < until && last.map_or(true, |end| date <= end) {
        occurrences.push(Occurrence {
            slot_id: slot.id.clone(),
            calendar_id: slot.calendar_id.clone(),
            title: slot.event_title.clone(),
            participants: participants.clone(),
            color: slot.color.clone(),
            start: at_minutes(date, slot.start_minutes),
            end: at_minutes(date, slot.end_minutes),
        });
        match date.checked_add_days(Days::new(7)) {
            Some(next) => date = next,
            None => break,
        }
    }
    occurrences
}

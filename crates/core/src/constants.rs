/// Color assigned to calendars created without one.
pub const DEFAULT_CALENDAR_COLOR: &str = "#3B82F6";

/// Title given to recurring slots created without one ("Recurring Event").
pub const DEFAULT_RECURRING_TITLE: &str = "반복 이벤트";

/// Author recorded on notices created without one ("Admin").
pub const DEFAULT_NOTICE_AUTHOR: &str = "관리자";

/// Number of minutes in a day; slot times are minutes since midnight.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Default number of weeks materialized when no window is requested.
pub const DEFAULT_OCCURRENCE_WEEKS: u32 = 4;

/// Upper bound on the materialization window.
pub const MAX_OCCURRENCE_WEEKS: u32 = 52;

/// Lifetime of an admin session, in hours.
pub const ADMIN_SESSION_TTL_HOURS: i64 = 24;

/// Lifetime of a user session, in hours (30 days).
pub const USER_SESSION_TTL_HOURS: i64 = 24 * 30;

//! Calendars module - calendars and their participant links.

mod calendars_model;
mod calendars_service;
mod calendars_traits;


pub use calendars_model::{resolve_color, Calendar, CalendarDetails, CalendarUpdate, NewCalendar};
pub use calendars_service::CalendarService;
pub use calendars_traits::{CalendarRepositoryTrait, CalendarServiceTrait};

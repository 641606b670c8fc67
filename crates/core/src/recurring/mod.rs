//! Recurring slots - weekly commitments on a calendar and their materialization.

mod recurrence;
mod recurring_model;
mod recurring_service;
mod recurring_traits;


pub use recurrence::{first_on_or_after, materialize, weekday_index};
pub use recurring_model::{
    decode_participant_names, encode_participant_names, AnchorUpdate, NewRecurringSlot,
    Occurrence, RecurringSlot, RecurringSlotUpdate,
};
pub use recurring_service::RecurringSlotService;
pub use recurring_traits::{RecurringSlotRepositoryTrait, RecurringSlotServiceTrait};

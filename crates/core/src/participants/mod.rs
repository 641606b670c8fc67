//! Participants module - the name-keyed directory of people linked to calendars.

mod participants_model;
mod participants_service;
mod participants_traits;

#[cfg(test)]
mod participants_service_tests;

pub use participants_model::{validate_participant_name, Participant};
pub use participants_service::ParticipantService;
pub use participants_traits::{ParticipantRepositoryTrait, ParticipantServiceTrait};

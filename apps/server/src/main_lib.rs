use std::sync::Arc;

use argon2::password_hash::PasswordHash;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use gbti_core::{
    auth::{SessionService, SessionServiceTrait},
    calendars::{CalendarService, CalendarServiceTrait},
    members::{MemberService, MemberServiceTrait},
    notices::{NoticeService, NoticeServiceTrait},
    notifications::{PushSubscriptionService, PushSubscriptionServiceTrait},
    participants::{ParticipantService, ParticipantServiceTrait},
    recurring::{RecurringSlotService, RecurringSlotServiceTrait},
};
use gbti_storage_sqlite::{
    db::{self, write_actor},
    CalendarRepository, MemberRepository, NoticeRepository, ParticipantRepository,
    PushSubscriptionRepository, RecurringSlotRepository, SessionRepository,
};

/// Argon2 hashes that unlock each role at login.
pub struct Credentials {
    pub admin_password_hash: Option<String>,
    pub user_password_hash: Option<String>,
}

pub struct AppState {
    pub calendar_service: Arc<dyn CalendarServiceTrait + Send + Sync>,
    pub participant_service: Arc<dyn ParticipantServiceTrait + Send + Sync>,
    pub recurring_service: Arc<dyn RecurringSlotServiceTrait + Send + Sync>,
    pub notice_service: Arc<dyn NoticeServiceTrait + Send + Sync>,
    pub member_service: Arc<dyn MemberServiceTrait + Send + Sync>,
    pub notification_service: Arc<dyn PushSubscriptionServiceTrait + Send + Sync>,
    pub session_service: Arc<dyn SessionServiceTrait + Send + Sync>,
    pub credentials: Credentials,
    pub secure_cookies: bool,
}

pub fn init_tracing() {
    let log_format = std::env::var("GBTI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn checked_hash(name: &str, hash: Option<&String>) -> anyhow::Result<Option<String>> {
    match hash {
        Some(hash) => {
            PasswordHash::new(hash)
                .map_err(|e| anyhow::anyhow!("{name} is not a valid argon2 hash: {e}"))?;
            Ok(Some(hash.clone()))
        }
        None => Ok(None),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let calendar_repository = Arc::new(CalendarRepository::new(pool.clone(), writer.clone()));
    let participant_repository =
        Arc::new(ParticipantRepository::new(pool.clone(), writer.clone()));
    let recurring_repository =
        Arc::new(RecurringSlotRepository::new(pool.clone(), writer.clone()));
    let notice_repository = Arc::new(NoticeRepository::new(pool.clone(), writer.clone()));
    let member_repository = Arc::new(MemberRepository::new(pool.clone(), writer.clone()));
    let subscription_repository =
        Arc::new(PushSubscriptionRepository::new(pool.clone(), writer.clone()));
    let session_repository = Arc::new(SessionRepository::new(pool.clone(), writer.clone()));

    let calendar_service = Arc::new(CalendarService::new(
        calendar_repository.clone(),
        recurring_repository.clone(),
    ));
    let participant_service = Arc::new(ParticipantService::new(participant_repository));
    let recurring_service = Arc::new(RecurringSlotService::new(
        recurring_repository,
        calendar_repository,
    ));
    let notice_service = Arc::new(NoticeService::new(notice_repository));
    let member_service = Arc::new(MemberService::new(member_repository));
    let notification_service = Arc::new(PushSubscriptionService::new(
        subscription_repository,
        config.vapid_public_key.clone(),
    ));
    let session_service = Arc::new(SessionService::new(session_repository));

    let credentials = Credentials {
        admin_password_hash: checked_hash(
            "GBTI_ADMIN_PASSWORD_HASH",
            config.admin_password_hash.as_ref(),
        )?,
        user_password_hash: checked_hash(
            "GBTI_USER_PASSWORD_HASH",
            config.user_password_hash.as_ref(),
        )?,
    };
    if credentials.admin_password_hash.is_none() {
        tracing::warn!("GBTI_ADMIN_PASSWORD_HASH is not set; admin login is disabled");
    }

    Ok(Arc::new(AppState {
        calendar_service,
        participant_service,
        recurring_service,
        notice_service,
        member_service,
        notification_service,
        session_service,
        credentials,
        secure_cookies: config.secure_cookies,
    }))
}

//! HTTP routes, mounted under `/api`.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{auth, config::Config, main_lib::AppState, models};

pub mod calendars;
pub mod health;
pub mod members;
pub mod notices;
pub mod notifications;
pub mod participants;
pub mod recurring;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        auth::login,
        auth::logout,
        auth::session,
        calendars::list_calendars,
        calendars::create_calendar,
        calendars::update_calendar,
        calendars::delete_calendar,
        calendars::add_participant,
        calendars::remove_participant,
        recurring::list_slots,
        recurring::create_slot,
        recurring::update_slots,
        recurring::delete_slot,
        recurring::list_occurrences,
        recurring::advance_anchor,
        participants::list_participants,
        notices::list_notices,
        notices::create_notice,
        notices::delete_notice,
        members::list_members,
        members::create_member,
        members::update_member,
        members::delete_member,
        notifications::subscribe,
        notifications::unsubscribe,
        notifications::vapid_key,
    ),
    components(schemas(
        models::OkResponse,
        models::Participant,
        models::ParticipantsResponse,
        models::RecurringSlot,
        models::SlotsResponse,
        models::SlotResponse,
        models::NewRecurringSlotRequest,
        models::RecurringSlotUpdateRequest,
        models::SlotIdRequest,
        models::AnchorUpdateRequest,
        models::Occurrence,
        models::OccurrencesResponse,
        models::Calendar,
        models::CalendarDetails,
        models::CalendarsResponse,
        models::CalendarResponse,
        models::NewCalendarRequest,
        models::CalendarUpdateRequest,
        models::AddParticipantRequest,
        models::RemoveParticipantRequest,
        models::Notice,
        models::NoticesResponse,
        models::NoticeResponse,
        models::NewNoticeRequest,
        models::Member,
        models::MembersResponse,
        models::MemberResponse,
        models::MemberRequest,
        models::SubscriptionKeys,
        models::BrowserSubscription,
        models::SubscribeRequest,
        models::UnsubscribeRequest,
        models::VapidKeyResponse,
        models::LoginRequest,
        models::LoginResponse,
        models::SessionResponse,
    )),
    tags((name = "gbti"))
)]
pub struct ApiDoc;

const SWAGGER_UI_PAGE: &str = r##"<!doctype html>
<html lang="ko">
  <head>
    <meta charset="utf-8" />
    <title>GBTI API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
    </script>
  </body>
</html>
"##;

async fn docs() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect();
    // Cookies only travel cross-origin with explicit origins and credentials.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

fn timeout_layer(config: &Config) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(calendars::router())
        .merge(recurring::router())
        .merge(participants::router())
        .merge(notices::router())
        .merge(members::router())
        .merge(notifications::router());

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .route("/docs", get(docs))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(timeout_layer(config))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt;

    fn config_with_timeout(request_timeout: Duration) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            db_path: String::new(),
            cors_allow: vec!["*".to_string()],
            request_timeout,
            admin_password_hash: None,
            user_password_hash: None,
            secure_cookies: false,
            vapid_public_key: None,
        }
    }

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let config = config_with_timeout(Duration::from_millis(20));
        let app: Router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(timeout_layer(&config));

        let response = app
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_docs_page_loads_generated_openapi() {
        assert!(SWAGGER_UI_PAGE.starts_with("<!doctype html>"));
        assert!(SWAGGER_UI_PAGE.contains(r##"dom_id: "#swagger-ui""##));
        assert!(SWAGGER_UI_PAGE.contains(r#"url: "/openapi.json""#));
        assert!(SWAGGER_UI_PAGE.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_openapi_lists_every_route_group() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        for path in [
            "/api/calendars",
            "/api/calendars/{id}/recurring",
            "/api/calendars/{id}/occurrences",
            "/api/notices",
            "/api/members",
            "/api/notifications/subscribe",
            "/api/login",
        ] {
            assert!(doc["paths"][path].is_object(), "missing {path}");
        }
    }
}

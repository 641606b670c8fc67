mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, NaiveDateTime, Utc};
use common::{TestApp, ADMIN_REQUIRED};
use serde_json::{json, Value};

async fn create_slot(app: &TestApp, admin: &str, calendar: &str, body: Value) -> Value {
    let response = app
        .send(
            Method::POST,
            &format!("/api/calendars/{calendar}/recurring"),
            Some(admin),
            Some(body),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["slot"].clone()
}

async fn slots(app: &TestApp, calendar: &str) -> Vec<Value> {
    let response = app
        .get(&format!("/api/calendars/{calendar}/recurring"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["slots"].as_array().unwrap().clone()
}

#[tokio::test]
async fn create_slot_uses_defaults() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let calendar = app.create_calendar(&admin, "Band").await;

    let slot = create_slot(
        &app,
        &admin,
        &calendar,
        json!({ "dayOfWeek": 2, "startMinutes": 1140, "endMinutes": 1260 }),
    )
    .await;
    assert_eq!(slot["eventTitle"], "반복 이벤트");
    assert_eq!(slot["color"], "#3B82F6");
    assert_eq!(slot["eventStartDate"], slot["startsOn"]);
    assert!(slot["endsOn"].is_null());
    assert!(slot["participantNames"].is_null());
    assert_eq!(slot["participants"], json!([]));
}

#[tokio::test]
async fn create_slot_rejects_bad_input() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let calendar = app.create_calendar(&admin, "Band").await;

    let bad_day = app
        .send(
            Method::POST,
            &format!("/api/calendars/{calendar}/recurring"),
            Some(&admin),
            Some(json!({ "dayOfWeek": 7, "startMinutes": 0, "endMinutes": 60 })),
        )
        .await;
    assert_eq!(bad_day.status, StatusCode::BAD_REQUEST);

    let unknown = app
        .send(
            Method::POST,
            "/api/calendars/missing/recurring",
            Some(&admin),
            Some(json!({ "dayOfWeek": 1, "startMinutes": 0, "endMinutes": 60 })),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let anonymous = app
        .send(
            Method::POST,
            &format!("/api/calendars/{calendar}/recurring"),
            None,
            Some(json!({ "dayOfWeek": 1, "startMinutes": 0, "endMinutes": 60 })),
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);
    assert_eq!(anonymous.body["message"], ADMIN_REQUIRED);

    assert!(slots(&app, &calendar).await.is_empty());
}

#[tokio::test]
async fn slots_are_ordered_by_day_then_start() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let calendar = app.create_calendar(&admin, "Band").await;

    for (day, start) in [(3, 600), (1, 900), (1, 300)] {
        create_slot(
            &app,
            &admin,
            &calendar,
            json!({ "dayOfWeek": day, "startMinutes": start, "endMinutes": start + 60 }),
        )
        .await;
    }

    let order: Vec<(i64, i64)> = slots(&app, &calendar)
        .await
        .iter()
        .map(|s| {
            (
                s["dayOfWeek"].as_i64().unwrap(),
                s["startMinutes"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(order, vec![(1, 300), (1, 900), (3, 600)]);
}

#[tokio::test]
async fn update_by_title_renames_and_sets_participants() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let calendar = app.create_calendar(&admin, "Band").await;
    for day in [1, 4] {
        create_slot(
            &app,
            &admin,
            &calendar,
            json!({ "dayOfWeek": day, "startMinutes": 600, "endMinutes": 660, "eventTitle": "Practice" }),
        )
        .await;
    }

    let response = app
        .send(
            Method::PUT,
            &format!("/api/calendars/{calendar}/recurring"),
            Some(&admin),
            Some(json!({
                "eventTitle": "Practice",
                "newTitle": "Rehearsal",
                "participants": ["Kim", "Ahn"]
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for slot in slots(&app, &calendar).await {
        assert_eq!(slot["eventTitle"], "Rehearsal");
        assert_eq!(slot["participants"], json!(["Kim", "Ahn"]));
        assert_eq!(slot["participantNames"], r#"["Kim","Ahn"]"#);
    }

    // An empty list clears the stored names.
    app.send(
        Method::PUT,
        &format!("/api/calendars/{calendar}/recurring"),
        Some(&admin),
        Some(json!({ "eventTitle": "Rehearsal", "newTitle": "Rehearsal", "participants": [] })),
    )
    .await;
    for slot in slots(&app, &calendar).await {
        assert!(slot["participantNames"].is_null());
    }
}

#[tokio::test]
async fn update_with_slot_id_targets_one_slot() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let calendar = app.create_calendar(&admin, "Band").await;
    let first = create_slot(
        &app,
        &admin,
        &calendar,
        json!({ "dayOfWeek": 1, "startMinutes": 600, "endMinutes": 660, "eventTitle": "Practice" }),
    )
    .await;
    create_slot(
        &app,
        &admin,
        &calendar,
        json!({ "dayOfWeek": 2, "startMinutes": 600, "endMinutes": 660, "eventTitle": "Practice" }),
    )
    .await;

    let response = app
        .send(
            Method::PUT,
            &format!("/api/calendars/{calendar}/recurring"),
            Some(&admin),
            Some(json!({
                "eventTitle": "Practice",
                "newTitle": "Sectional",
                "slotId": first["id"]
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let titles: Vec<String> = slots(&app, &calendar)
        .await
        .iter()
        .map(|s| s["eventTitle"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Sectional", "Practice"]);
}

#[tokio::test]
async fn delete_is_scoped_to_calendar() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let band = app.create_calendar(&admin, "Band").await;
    let choir = app.create_calendar(&admin, "Choir").await;
    let slot = create_slot(
        &app,
        &admin,
        &band,
        json!({ "dayOfWeek": 5, "startMinutes": 0, "endMinutes": 30 }),
    )
    .await;

    let wrong = app
        .send(
            Method::DELETE,
            &format!("/api/calendars/{choir}/recurring"),
            Some(&admin),
            Some(json!({ "slotId": slot["id"] })),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::OK);
    assert_eq!(slots(&app, &band).await.len(), 1);

    let right = app
        .send(
            Method::DELETE,
            &format!("/api/calendars/{band}/recurring"),
            Some(&admin),
            Some(json!({ "slotId": slot["id"] })),
        )
        .await;
    assert_eq!(right.status, StatusCode::OK);
    assert!(slots(&app, &band).await.is_empty());
}

#[tokio::test]
async fn occurrences_follow_the_anchor() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let calendar = app.create_calendar(&admin, "Band").await;
    let slot = create_slot(
        &app,
        &admin,
        &calendar,
        json!({ "dayOfWeek": 3, "startMinutes": 1140, "endMinutes": 1260, "eventTitle": "Practice" }),
    )
    .await;

    let today = Utc::now().date_naive();
    let uri = format!("/api/calendars/{calendar}/occurrences?from={today}&weeks=2");
    let response = app.get(&uri, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let occurrences = response.body["occurrences"].as_array().unwrap().clone();
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0]["title"], "Practice");
    assert_eq!(occurrences[0]["slotId"], slot["id"]);
    let first: NaiveDateTime = serde_json::from_value(occurrences[0]["start"].clone()).unwrap();
    let second: NaiveDateTime = serde_json::from_value(occurrences[1]["start"].clone()).unwrap();
    assert_eq!(second - first, Duration::days(7));

    // Advancing the anchor past the first occurrence is open to any caller.
    let next = (first + Duration::days(1)).format("%Y-%m-%dT%H:%M:%S").to_string();
    let advanced = app
        .send(
            Method::POST,
            "/api/recurring/update",
            None,
            Some(json!({ "slotId": slot["id"], "eventStartDate": next })),
        )
        .await;
    assert_eq!(advanced.status, StatusCode::OK);

    let response = app.get(&uri, None).await;
    let occurrences = response.body["occurrences"].as_array().unwrap();
    assert_eq!(occurrences.len(), 1);
    let only: NaiveDateTime = serde_json::from_value(occurrences[0]["start"].clone()).unwrap();
    assert_eq!(only, second);
}

#[tokio::test]
async fn occurrence_window_is_bounded() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let calendar = app.create_calendar(&admin, "Band").await;

    let zero = app
        .get(&format!("/api/calendars/{calendar}/occurrences?weeks=0"), None)
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    let too_long = app
        .get(&format!("/api/calendars/{calendar}/occurrences?weeks=53"), None)
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);

    let bad_date = app
        .get(&format!("/api/calendars/{calendar}/occurrences?from=soon"), None)
        .await;
    assert_eq!(bad_date.status, StatusCode::BAD_REQUEST);

    let far_future = app
        .get(
            &format!("/api/calendars/{calendar}/occurrences?from=%2B262142-12-20&weeks=52"),
            None,
        )
        .await;
    assert_eq!(far_future.status, StatusCode::BAD_REQUEST);
    assert_eq!(far_future.body["code"], 400);

    let unknown = app.get("/api/calendars/missing/occurrences", None).await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(unknown.body["occurrences"], json!([]));
}

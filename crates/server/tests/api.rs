use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use engine::{Engine, EventDraft, EventKind, ScanDraft};
use migration::MigratorTrait;

/// Router plus a second engine on the same database for seeding.
async fn app() -> (Router, Engine) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    for (net_id, first, last) in [
        ("alice", "Alice", "Archer"),
        ("bob", "Bob", "Baker"),
        ("carol", "Carol", "Cooper"),
    ] {
        seed_user(&db, net_id, first, last).await;
    }

    let serving = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    let seeding = Engine::builder().database(db).build().await.unwrap();
    (server::router(serving), seeding)
}

async fn seed_user(db: &DatabaseConnection, net_id: &str, first: &str, last: &str) {
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (net_id, first_name, last_name, email) VALUES (?, ?, ?, ?)",
        vec![
            net_id.into(),
            first.into(),
            last.into(),
            format!("{net_id}@example.edu").into(),
        ],
    ))
    .await
    .unwrap();
}

async fn seed_event(engine: &Engine, kind: EventKind, days_ago: i64) -> Uuid {
    let start = Utc::now() - Duration::days(days_ago);
    engine
        .create_event(
            EventDraft {
                title: Some(format!("{} #{days_ago}", kind.as_str())),
                kind: Some(kind.as_str().to_string()),
                start_time: Some(start),
                end_time: Some(start + Duration::hours(2)),
                location: Some("Library".to_string()),
                created_by: Some("admin1".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .await
        .unwrap()
        .id
}

async fn seed_scan(engine: &Engine, net_id: &str, event_id: Uuid, plus_one: i64) {
    engine
        .insert_scan(
            ScanDraft {
                net_id: Some(net_id.to_string()),
                scanner_id: Some("door-1".to_string()),
                event_id: Some(event_id.to_string()),
                plus_one: Some(plus_one),
            },
            Utc::now(),
        )
        .await
        .unwrap();
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn insert_scan_then_duplicate() {
    let (app, seeding) = app().await;
    let event_id = seed_event(&seeding, EventKind::Serve, 0).await;
    let body = json!({
        "netId": "alice",
        "scannerId": "door-1",
        "eventId": event_id.to_string(),
        "plusOne": 2,
    });

    let (status, first) = send(&app, post_json("/InsertScan", body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, json!({ "status": "success" }));

    let (status, second) = send(&app, post_json("/InsertScan", body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(second["status"], "error");
    assert_eq!(second["error"], "duplicateScan");

    let (status, scans) = send(&app, get("/GetScans")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scans["scans"].as_array().unwrap().len(), 1);
    assert_eq!(scans["scans"][0]["plusOne"], 2);
    assert_eq!(scans["scans"][0]["eventId"], event_id.to_string());
}

#[tokio::test]
async fn insert_scan_requires_event() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        post_json("/InsertScan", json!({ "netId": "alice", "scannerId": "door-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "insufficientData");
    assert_eq!(body["message"], "Insufficient data: eventId is required");
}

#[tokio::test]
async fn scan_for_unknown_event_or_user_is_unknown_error() {
    let (app, seeding) = app().await;
    let event_id = seed_event(&seeding, EventKind::Serve, 0).await;

    for (net_id, event_id) in [("alice", Uuid::new_v4()), ("mallory", event_id)] {
        let (status, body) = send(
            &app,
            post_json(
                "/InsertScan",
                json!({
                    "netId": net_id,
                    "scannerId": "door-1",
                    "eventId": event_id.to_string(),
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "status": "error",
                "error": "unknownError",
                "message": "internal server error",
            })
        );
    }

    let (_, scans) = send(&app, get("/GetScans")).await;
    assert_eq!(scans["scans"], json!([]));
}

fn assert_insufficient_data(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "insufficientData");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Insufficient data: "),
        "{body}"
    );
}

#[tokio::test]
async fn mistyped_scan_body_is_insufficient_data() {
    let (app, seeding) = app().await;
    let event_id = seed_event(&seeding, EventKind::Serve, 0).await;

    let (status, body) = send(
        &app,
        post_json(
            "/InsertScan",
            json!({
                "netId": "alice",
                "scannerId": "door-1",
                "eventId": event_id.to_string(),
                "plusOne": "2",
            }),
        ),
    )
    .await;
    assert_insufficient_data(status, &body);

    let (_, scans) = send(&app, get("/GetScans")).await;
    assert_eq!(scans["scans"], json!([]));
}

#[tokio::test]
async fn unparsable_event_start_is_insufficient_data() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/CreateEvent",
            json!({
                "title": "Food drive",
                "type": "serve",
                "startTime": "tomorrow",
                "endTime": Utc::now().to_rfc3339(),
                "location": "Gym",
                "createdBy": "admin1",
            }),
        ),
    )
    .await;
    assert_insufficient_data(status, &body);
}

#[tokio::test]
async fn login_body_that_is_not_json_is_insufficient_data() {
    let (app, _) = app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/AttemptLogin")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_insufficient_data(status, &body);
}

#[tokio::test]
async fn attendance_for_unscanned_user_is_empty() {
    let (app, seeding) = app().await;
    seed_event(&seeding, EventKind::Learn, 1).await;

    let (status, body) = send(&app, get("/GetUserAttendance/carol")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "scans": [], "events": [] })
    );
}

#[tokio::test]
async fn attendance_and_punches_for_user() {
    let (app, seeding) = app().await;
    let older = seed_event(&seeding, EventKind::Serve, 3).await;
    let newer = seed_event(&seeding, EventKind::Learn, 1).await;
    seed_scan(&seeding, "bob", older, 0).await;
    seed_scan(&seeding, "bob", newer, 1).await;

    let (status, body) = send(&app, get("/GetUserAttendance/bob")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scans"].as_array().unwrap().len(), 2);
    assert_eq!(body["events"][0]["eventId"], newer.to_string());
    assert_eq!(body["events"][0]["type"], "learn");
    assert_eq!(body["events"][1]["eventId"], older.to_string());

    let (status, body) = send(&app, get("/GetUserPunches/bob")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "punches": [
                { "type": "learn", "count": 1, "threshold": 2, "complete": false, "remaining": 1 },
                { "type": "serve", "count": 1, "threshold": 4, "complete": false, "remaining": 3 },
            ],
            "raffleEligible": false,
        })
    );
}

#[tokio::test]
async fn create_event_and_list_upcoming() {
    let (app, _) = app().await;
    let start = Utc::now() + Duration::days(1);

    let (status, created) = send(
        &app,
        post_json(
            "/CreateEvent",
            json!({
                "title": "Food drive",
                "type": "serve",
                "startTime": start.to_rfc3339(),
                "endTime": (start + Duration::hours(3)).to_rfc3339(),
                "location": "Gym",
                "createdBy": "admin1",
                "notes": "Bring cans",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "success");

    let (status, body) = send(&app, get("/GetUpcomingEvents")).await;
    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["eventId"], created["eventId"]);
    assert_eq!(events[0]["title"], "Food drive");
    assert_eq!(events[0]["editedBy"], "admin1");
    assert_eq!(events[0]["notes"], "Bring cans");
    assert_eq!(events[0]["waiverUrl"], Value::Null);
}

#[tokio::test]
async fn create_event_without_location_is_rejected() {
    let (app, _) = app().await;
    let start = Utc::now() + Duration::days(1);

    let (status, body) = send(
        &app,
        post_json(
            "/CreateEvent",
            json!({
                "title": "Food drive",
                "type": "serve",
                "startTime": start.to_rfc3339(),
                "endTime": (start + Duration::hours(3)).to_rfc3339(),
                "createdBy": "admin1",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "insufficientData");

    let (_, body) = send(&app, get("/GetUpcomingEvents")).await;
    assert_eq!(body["events"], json!([]));
}

#[tokio::test]
async fn login_known_and_unknown_users() {
    let (app, _) = app().await;

    let (status, body) = send(&app, post_json("/AttemptLogin", json!({ "netId": "alice" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "user": {
                "netId": "alice",
                "firstName": "Alice",
                "lastName": "Archer",
                "email": "alice@example.edu",
            },
        })
    );

    let (status, body) = send(&app, post_json("/AttemptLogin", json!({ "netId": "eve" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "noUser");

    let (status, body) = send(&app, post_json("/AttemptLogin", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "insufficientData");
}

#[tokio::test]
async fn summaries_keep_totals_global() {
    let (app, seeding) = app().await;
    let oldest = seed_event(&seeding, EventKind::Discover, 40).await;
    let mut recent = Vec::new();
    for days_ago in 0..5 {
        recent.push(seed_event(&seeding, EventKind::Connect, days_ago).await);
    }
    seed_scan(&seeding, "alice", oldest, 3).await;
    seed_scan(&seeding, "alice", recent[1], 0).await;
    seed_scan(&seeding, "bob", recent[1], 1).await;

    let (status, body) = send(&app, get("/GetEventSummaries")).await;
    assert_eq!(status, StatusCode::OK);

    let summaries = &body["eventSummaries"];
    let per_event = summaries["scansPerEvent"].as_object().unwrap();
    assert_eq!(per_event.len(), 1);
    assert_eq!(per_event[&recent[1].to_string()]["numScans"], 2);
    assert_eq!(per_event[&recent[1].to_string()]["name"], "connect #1");
    assert!(!per_event.contains_key(&oldest.to_string()));
    assert_eq!(summaries["totalAttendance"], 7);
    assert_eq!(summaries["raffleEligibleStudents"], json!([]));
}

#[tokio::test]
async fn student_raffle_downloads_csv() {
    let (app, seeding) = app().await;
    let kinds = [
        EventKind::Socialize,
        EventKind::Learn,
        EventKind::Serve,
        EventKind::Discover,
        EventKind::Connect,
    ];
    let mut days_ago = 0;
    for kind in kinds {
        for _ in 0..2 {
            let event_id = seed_event(&seeding, kind, days_ago).await;
            seed_scan(&seeding, "carol", event_id, 0).await;
            days_ago += 1;
        }
    }

    let response = app.clone().oneshot(get("/StudentRaffle")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"raffleEligibleStudents.csv\""
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        String::from_utf8(bytes.to_vec()).unwrap(),
        "netId,firstName,lastName,email\ncarol,Carol,Cooper,carol@example.edu\n"
    );

    let (_, body) = send(&app, get("/GetEventSummaries")).await;
    assert_eq!(
        body["eventSummaries"]["raffleEligibleStudents"],
        json!(["carol"])
    );
}

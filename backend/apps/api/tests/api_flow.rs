//! End-to-end flow against a real PostgreSQL database
//!
//! Needs `DATABASE_URL` pointing at a server where test databases may be
//! created. Run with `cargo test -p api -- --ignored`.

use api::{Settings, build_app};
use auth::domain::User;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use auth::{AuthError, PgAuthRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use sqlx::PgPool;
use kernel::error::conversions::is_unique_violation;
use tower::ServiceExt;

fn app(pool: PgPool) -> Router {
    let settings = Settings::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused@localhost/unused".to_string()),
        "JWT_KEY" => Some("integration-secret".to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .unwrap();

    build_app(pool, &settings).unwrap()
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("token={token}"));
    }
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn sign_up(app: &Router, username: &str) -> String {
    let credentials = json!({ "username": username, "password": "hunter2" });

    let res = send(app, "POST", "/api/register", None, Some(credentials.clone())).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = send(app, "POST", "/api/login", None, Some(credentials)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let set_cookie = res.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie
        .split(';')
        .next()
        .and_then(|c| c.strip_prefix("token="))
        .unwrap()
        .to_string()
}

#[ignore]
#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_register_login_and_crud(pool: PgPool) {
    let app = app(pool);
    let token = sign_up(&app, "lifter@example.com").await;

    let res = send(&app, "GET", "/api/heartbeat", Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = send(
        &app,
        "POST",
        "/api/v1/sets",
        Some(&token),
        Some(json!({ "weight": 111.22, "exercise": "squat", "repetitions": 10 })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = json_body(res).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["weight"], 111.22);

    let res = send(&app, "GET", "/api/v1/sets/1", Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, created);

    let res = send(
        &app,
        "PUT",
        "/api/v1/sets/1",
        Some(&token),
        Some(json!({ "weight": 115, "exercise": "squat", "repetitions": 8 })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["repetitions"], 8);

    let res = send(&app, "GET", "/api/v1/sets?limit=50", Some(&token), None).await;
    let list = json_body(res).await;
    assert_eq!(list["results"], 1);
    assert_eq!(list["limit"], 10);

    let res = send(&app, "DELETE", "/api/v1/sets/1", Some(&token), None).await;
    assert_eq!(json_body(res).await, json!({ "result": "success" }));

    let res = send(&app, "GET", "/api/v1/sets/1", Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[ignore]
#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_sets_are_private(pool: PgPool) {
    let app = app(pool);
    let alice = sign_up(&app, "alice@example.com").await;
    let bob = sign_up(&app, "bob@example.com").await;

    let res = send(
        &app,
        "POST",
        "/api/v1/sets",
        Some(&alice),
        Some(json!({ "weight": 60, "exercise": "bench", "repetitions": 5 })),
    )
    .await;
    let id = json_body(res).await["id"].as_i64().unwrap();
    let uri = format!("/api/v1/sets/{id}");

    let res = send(&app, "GET", &uri, Some(&bob), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = send(&app, "DELETE", &uri, Some(&bob), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = send(&app, "GET", &uri, Some(&alice), None).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[ignore]
#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_duplicate_registration_and_missing_cookie(pool: PgPool) {
    let app = app(pool);
    sign_up(&app, "lifter@example.com").await;

    let res = send(
        &app,
        "POST",
        "/api/register",
        None,
        Some(json!({ "username": "LIFTER@example.com", "password": "x" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = send(&app, "GET", "/api/v1/sets", None, None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

fn user(name: &str) -> User {
    let raw = RawPassword::new("hunter2".to_string()).unwrap();
    User::new(UserName::new(name).unwrap(), UserPassword::from_raw(&raw, 4).unwrap())
}

#[ignore]
#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_repository_insert_of_taken_name_is_user_name_taken(pool: PgPool) {
    let repo = PgAuthRepository::new(pool);

    repo.create(&user("lifter@example.com")).await.unwrap();
    let err = repo.create(&user("Lifter@Example.com")).await.unwrap_err();
    assert!(matches!(err, AuthError::UserNameTaken));
}

#[ignore]
#[sqlx::test(migrations = "../../../database/migrations")]
async fn test_unique_violation_is_recognized(pool: PgPool) {
    let insert = "INSERT INTO users (user_id, username, password_hash) \
                  VALUES (gen_random_uuid(), 'dup@example.com', 'x')";

    sqlx::query(insert).execute(&pool).await.unwrap();
    let err = sqlx::query(insert).execute(&pool).await.unwrap_err();
    assert!(is_unique_violation(&err));
}

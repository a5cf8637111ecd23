//! End-to-end tests for the client and signin routes against an in-memory database.

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use clients_api::config::AppConfig;
use clients_api::{app, apply_migrations, connect, AppState};

const SECRET: &str = "integration-secret";

async fn make_app() -> Result<Router> {
    let mut config = AppConfig::default();
    config.database_url = "sqlite::memory:".into();
    config.auth.jwt_secret = SECRET.into();

    let pool = connect(&config.database_url).await?;
    apply_migrations(&pool).await?;
    let state = AppState::new(pool, &config);
    Ok(app(state, config.max_body_bytes))
}

fn basic(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}

fn forge(claims: Value) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token")
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

async fn send(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024).await?;
    let payload = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };
    Ok((status, payload))
}

async fn signin(app: &Router) -> Result<String> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/signin/authenticate")
        .header("authorization", basic("gopher", "academy"))
        .body(Body::empty())?;
    let (status, payload) = send(app, request).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(payload["jwt"].as_str().expect("jwt in body").to_string())
}

fn add_request(token: &str, id: &str, body: Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(format!("/api/v1/client/{id}"))
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?)
}

fn get_request(token: &str, uri: &str) -> Result<Request<Body>> {
    Ok(Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())?)
}

#[tokio::test]
async fn signin_issues_token_with_fixed_scopes_and_lifetime() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;

    let mut validation = jsonwebtoken::Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;
    let claims = jsonwebtoken::decode::<Value>(
        &token,
        &jsonwebtoken::DecodingKey::from_secret(SECRET.as_bytes()),
        &validation,
    )?
    .claims;

    assert_eq!(claims["scopes"], json!(["api:read", "api:write"]));
    let iat = claims["iat"].as_i64().expect("iat");
    let exp = claims["exp"].as_i64().expect("exp");
    assert_eq!(exp - iat, 9 * 60);
    assert!(claims["nbf"].as_i64().expect("nbf") <= iat);
    Ok(())
}

#[tokio::test]
async fn signin_rejects_wrong_credentials() -> Result<()> {
    let app = make_app().await?;
    for (user, pass) in [("gopher", "wrong"), ("someone", "academy"), ("someone", "wrong")] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/signin/authenticate")
            .header("authorization", basic(user, pass))
            .body(Body::empty())?;
        let (status, payload) = send(&app, request).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(payload["error"]["code"], "unauthorized");
    }
    Ok(())
}

#[tokio::test]
async fn signin_without_credentials_is_unauthorized() -> Result<()> {
    let app = make_app().await?;
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/signin/authenticate")
        .body(Body::empty())?;
    let (status, _) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn add_then_get_returns_the_client() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;

    let (status, _) = send(&app, add_request(&token, "C1", json!({ "ClientName": "Acme" }))?).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, payload) = send(&app, get_request(&token, "/api/v1/client/C1")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload, json!({ "ClientID": "C1", "ClientName": "Acme" }));
    Ok(())
}

#[tokio::test]
async fn contact_fields_round_trip_through_storage() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;
    let body = json!({
        "ClientName": "Globex",
        "ContactName": "Hank Scorpio",
        "ContactEmail": "hank@globex.test",
        "ContactMobile": 5550199
    });

    let (status, _) = send(&app, add_request(&token, "G1", body)?).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, payload) = send(&app, get_request(&token, "/api/v1/client/G1")?).await?;
    assert_eq!(payload["ClientName"], "Globex");
    assert_eq!(payload["ContactName"], "Hank Scorpio");
    assert_eq!(payload["ContactEmail"], "hank@globex.test");
    assert_eq!(payload["ContactMobile"], 5550199);
    Ok(())
}

#[tokio::test]
async fn list_returns_every_added_client() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;
    for i in 0..5 {
        let (status, _) = send(
            &app,
            add_request(&token, &format!("C{i}"), json!({ "ClientName": format!("Client {i}") }))?,
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, payload) = send(&app, get_request(&token, "/api/v1/client")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload.as_array().map(Vec::len), Some(5));
    Ok(())
}

#[tokio::test]
async fn get_missing_client_is_not_found() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;

    let (status, payload) = send(&app, get_request(&token, "/api/v1/client/ghost")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(payload["error"]["code"], "not_found");
    assert_eq!(payload["error"]["message"], "Client ghost not found");
    assert_eq!(payload["error"]["details"]["id"], "ghost");
    Ok(())
}

#[tokio::test]
async fn duplicate_client_id_conflicts() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;

    let (status, _) = send(&app, add_request(&token, "C1", json!({ "ClientName": "Acme" }))?).await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, payload) = send(&app, add_request(&token, "C1", json!({ "ClientName": "Acme" }))?).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(payload["error"]["code"], "conflict");
    Ok(())
}

#[tokio::test]
async fn add_without_name_fails_validation() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;

    let (status, payload) = send(&app, add_request(&token, "C1", json!({}))?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(payload["error"]["code"], "validation_error");
    Ok(())
}

#[tokio::test]
async fn token_without_scopes_is_rejected_everywhere() -> Result<()> {
    let app = make_app().await?;
    let token = forge(json!({ "iat": now(), "nbf": now(), "exp": now() + 300 }));

    let requests = [
        add_request(&token, "C1", json!({ "ClientName": "Acme" }))?,
        get_request(&token, "/api/v1/client/C1")?,
        get_request(&token, "/api/v1/client")?,
    ];
    for request in requests {
        let (status, payload) = send(&app, request).await?;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(payload["error"]["code"], "invalid-scopes");
    }
    Ok(())
}

#[tokio::test]
async fn scope_check_runs_before_body_parsing() -> Result<()> {
    let app = make_app().await?;
    let token = forge(json!({ "iat": now(), "nbf": now(), "exp": now() + 300 }));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/client/C1")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())?;
    let (status, payload) = send(&app, request).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(payload["error"]["code"], "invalid-scopes");
    Ok(())
}

#[tokio::test]
async fn malformed_add_body_gets_error_envelope() -> Result<()> {
    let app = make_app().await?;
    let token = signin(&app).await?;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/client/C1")
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let (status, payload) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(payload["error"]["code"], "validation_error");

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/client/C1")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(r#"{"ClientName":"Acme"}"#))?;
    let (status, payload) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(payload["error"]["code"], "validation_error");
    Ok(())
}

#[tokio::test]
async fn read_only_token_cannot_add() -> Result<()> {
    let app = make_app().await?;
    let token = forge(json!({ "iat": now(), "nbf": now(), "exp": now() + 300, "scopes": ["api:read"] }));

    let (status, _) = send(&app, add_request(&token, "C1", json!({ "ClientName": "Acme" }))?).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, payload) = send(&app, get_request(&token, "/api/v1/client")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload, json!([]));
    Ok(())
}

#[tokio::test]
async fn expired_token_is_unauthorized_not_invalid_scopes() -> Result<()> {
    let app = make_app().await?;
    let token = forge(json!({
        "iat": now() - 3600,
        "nbf": now() - 3600,
        "exp": now() - 3000,
        "scopes": ["api:read", "api:write"]
    }));

    let (status, payload) = send(&app, get_request(&token, "/api/v1/client")?).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["error"]["code"], "unauthorized");
    Ok(())
}

#[tokio::test]
async fn malformed_or_missing_token_is_unauthorized() -> Result<()> {
    let app = make_app().await?;

    let (status, payload) = send(&app, get_request("definitely-not-a-jwt", "/api/v1/client")?).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(payload["error"]["code"], "unauthorized");

    let request = Request::builder().uri("/api/v1/client").body(Body::empty())?;
    let (status, _) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn rejected_add_does_not_write() -> Result<()> {
    let app = make_app().await?;
    let scopeless = forge(json!({ "iat": now(), "nbf": now(), "exp": now() + 300 }));
    let (status, _) = send(&app, add_request(&scopeless, "C1", json!({ "ClientName": "Acme" }))?).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let token = signin(&app).await?;
    let (status, _) = send(&app, get_request(&token, "/api/v1/client/C1")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn readiness_reports_database_ok() -> Result<()> {
    let app = make_app().await?;
    let request = Request::builder().uri("/ready").body(Body::empty())?;
    let (status, payload) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["database"], "ok");
    Ok(())
}

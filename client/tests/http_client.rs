//! Integration tests for the HTTP API client against a loopback backend.
//!
//! A small actix-web app stands in for the NewAra backend so the client's
//! cookie handling, CSRF header, query strings, and status mapping are
//! exercised over real HTTP.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use newara_client::api::{
    ApiError, CSRF_HEADER, HttpApiClient, LoginState, NewAraApi, resolve_login_state,
};
use newara_client::config::{ClientConfig, Environment};
use serde_json::json;
use url::Url;

const CSRF_TOKEN: &str = "tok%2B1";

async fn me(req: HttpRequest) -> HttpResponse {
    if req.cookie("sessionid").is_some() {
        HttpResponse::Ok().json(json!({ "user": 7, "nickname": "ara", "email": null }))
    } else {
        HttpResponse::Unauthorized()
            .json(json!({ "detail": "Authentication credentials were not provided." }))
    }
}

async fn boards() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Set-Cookie", format!("csrftoken={CSRF_TOKEN}; Path=/")))
        .json(json!([
            { "id": 1, "slug": "free", "ko_name": "자유게시판", "en_name": "Free Board" },
            { "id": 2, "slug": "notice", "ko_name": "공지", "en_name": "Notice", "is_readonly": true }
        ]))
}

async fn articles(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    let board = query.get("parent_board").cloned().unwrap_or_default();
    let page = query.get("page").cloned().unwrap_or_default();
    HttpResponse::Ok().json(json!({
        "num_pages": 3,
        "num_items": 1,
        "current": 2,
        "results": [{
            "id": 10,
            "title": format!("board {board} page {page}"),
            "created_at": "2024-03-02T09:15:00Z"
        }]
    }))
}

async fn top_articles() -> HttpResponse {
    HttpResponse::ServiceUnavailable().body("maintenance window")
}

async fn notifications() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("{ truncated")
}

async fn read_notification(path: web::Path<u64>) -> HttpResponse {
    if path.into_inner() == 13 {
        HttpResponse::BadRequest().json(json!({
            "notification": ["already read"],
            "meta": { "reason": "stale" }
        }))
    } else {
        HttpResponse::Ok().json(json!({}))
    }
}

async fn read_all(req: HttpRequest) -> HttpResponse {
    let token = req
        .headers()
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok());
    if token == Some("tok+1") {
        HttpResponse::Ok().json(json!({}))
    } else {
        HttpResponse::Forbidden().json(json!({ "detail": "CSRF Failed" }))
    }
}

async fn slow_boards() -> HttpResponse {
    actix_rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().json(json!([]))
}

struct Backend {
    base_url: Url,
    handle: ServerHandle,
}

fn backend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me/", web::get().to(me))
        .route("/boards/", web::get().to(boards))
        .route("/articles/", web::get().to(articles))
        .route("/articles/top/", web::get().to(top_articles))
        .route("/notifications/", web::get().to(notifications))
        .route("/notifications/read_all/", web::post().to(read_all))
        .route(
            "/notifications/{id}/read/",
            web::post().to(read_notification),
        );
}

fn slow_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/boards/", web::get().to(slow_boards));
}

fn start_backend() -> Backend {
    serve(backend_routes)
}

fn serve(routes: fn(&mut web::ServiceConfig)) -> Backend {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    let server = HttpServer::new(move || {
        App::new().service(web::scope("/api").configure(routes))
    })
    .workers(1)
    .listen(listener)
    .expect("listen on loopback")
    .run();
    let handle = server.handle();
    actix_rt::spawn(server);

    Backend {
        base_url: Url::parse(&format!("http://{addr}/api/")).expect("base URL"),
        handle,
    }
}

fn client_for(base_url: Url) -> HttpApiClient {
    client_with_timeout(base_url, Duration::from_secs(5))
}

fn client_with_timeout(base_url: Url, timeout: Duration) -> HttpApiClient {
    let config = ClientConfig::for_environment(Environment::Development)
        .expect("default config")
        .with_api_base_url(base_url)
        .with_request_timeout(timeout);
    HttpApiClient::new(&config).expect("client should build")
}

#[actix_rt::test]
async fn missing_session_resolves_to_anonymous() {
    let backend = start_backend();
    let client = client_for(backend.base_url.clone());

    let state = resolve_login_state(&client).await.expect("state resolves");
    assert_eq!(state, LoginState::Anonymous);

    backend.handle.stop(false).await;
}

#[actix_rt::test]
async fn session_cookie_resolves_to_signed_in() {
    let backend = start_backend();
    let client = client_for(backend.base_url.clone());
    client.add_cookie("sessionid=s1; Path=/");

    let state = resolve_login_state(&client).await.expect("state resolves");
    let profile = state.profile().expect("user should be signed in");
    assert_eq!(profile.user, 7);
    assert_eq!(profile.nickname, "ara");

    backend.handle.stop(false).await;
}

#[actix_rt::test]
async fn board_listing_and_articles_decode() {
    let backend = start_backend();
    let client = client_for(backend.base_url.clone());

    let boards = client.boards().await.expect("boards should load");
    assert_eq!(boards.len(), 2);
    assert!(boards.iter().any(|board| board.slug == "notice" && board.is_readonly));

    let page = client
        .board_articles(1, 2)
        .await
        .expect("articles should load");
    assert!(page.has_next());
    let article = page.results.first().expect("one article");
    assert_eq!(article.title, "board 1 page 2");

    backend.handle.stop(false).await;
}

#[actix_rt::test]
async fn mutating_requests_echo_the_csrf_cookie() {
    let backend = start_backend();
    let client = client_for(backend.base_url.clone());

    let refused = client
        .read_all_notifications()
        .await
        .expect_err("request without CSRF token should fail");
    assert!(matches!(refused, ApiError::Unauthorized { .. }));

    client.boards().await.expect("boards should load");
    assert_eq!(client.csrf_token().as_deref(), Some("tok+1"));
    client
        .read_all_notifications()
        .await
        .expect("request with CSRF token should succeed");

    backend.handle.stop(false).await;
}

#[actix_rt::test]
async fn field_errors_are_flattened() {
    let backend = start_backend();
    let client = client_for(backend.base_url.clone());

    client
        .read_notification(12)
        .await
        .expect("unread notification should be marked");
    let error = client
        .read_notification(13)
        .await
        .expect_err("stale notification should be rejected");
    assert_eq!(error, ApiError::validation("already read\nstale"));

    backend.handle.stop(false).await;
}

#[actix_rt::test]
async fn malformed_bodies_and_failing_statuses_are_reported() {
    let backend = start_backend();
    let client = client_for(backend.base_url.clone());

    let decode = client
        .notifications(1)
        .await
        .expect_err("truncated JSON should fail");
    assert!(matches!(decode, ApiError::Decode { .. }));

    let unavailable = client
        .top_articles(1)
        .await
        .expect_err("maintenance should fail");
    assert_eq!(
        unavailable,
        ApiError::status(503_u16, "status 503: maintenance window")
    );

    backend.handle.stop(false).await;
}

#[actix_rt::test]
async fn slow_backend_is_a_timeout() {
    let backend = serve(slow_routes);
    let client = client_with_timeout(backend.base_url.clone(), Duration::from_secs(1));

    let error = client.boards().await.expect_err("backend is too slow");
    assert!(
        matches!(error, ApiError::Timeout { .. }),
        "unexpected error: {error:?}"
    );

    backend.handle.stop(false).await;
}

#[actix_rt::test]
async fn unreachable_backend_is_a_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        listener.local_addr().expect("listener address").port()
    };
    let base_url = Url::parse(&format!("http://127.0.0.1:{port}/api/")).expect("base URL");
    let client = client_for(base_url);

    let error = client.boards().await.expect_err("nothing is listening");
    assert!(
        matches!(error, ApiError::Transport { .. }),
        "unexpected error: {error:?}"
    );
}

//! Behavioural tests for notification socket URL resolution.
//!
//! These scenarios pin the three-way choice between an explicit override,
//! the production default, and the development default.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use newara_client::config::{ConfigError, Environment, resolve_socket_url};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use url::Url;

const STAGING_SOCKET_URL: &str = "wss://staging.ara.example/ws";

/// Test world holding the resolver inputs and its outcome.
#[derive(Default, ScenarioState)]
struct World {
    environment: Slot<Environment>,
    override_url: Slot<Option<String>>,
    resolved: Slot<Result<Url, ConfigError>>,
}

impl World {
    fn resolved(&self) -> Result<Url, ConfigError> {
        self.resolved.get().expect("resolution should have run")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the production environment")]
fn the_production_environment(world: &World) {
    world.environment.set(Environment::Production);
}

#[given("the development environment")]
fn the_development_environment(world: &World) {
    world.environment.set(Environment::Development);
}

#[given("no socket URL override")]
fn no_socket_url_override(world: &World) {
    world.override_url.set(None);
}

#[given("a socket URL override pointing at a staging host")]
fn a_socket_url_override_pointing_at_a_staging_host(world: &World) {
    world.override_url.set(Some(STAGING_SOCKET_URL.to_owned()));
}

#[given("a socket URL override using an HTTP scheme")]
fn a_socket_url_override_using_an_http_scheme(world: &World) {
    world
        .override_url
        .set(Some("https://staging.ara.example/ws".to_owned()));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the socket URL is resolved")]
fn the_socket_url_is_resolved(world: &World) {
    let environment = world.environment.get().expect("environment should be set");
    let override_url = world.override_url.get().expect("override should be set");
    world
        .resolved
        .set(resolve_socket_url(environment, override_url.as_deref()));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the URL is the public secure socket")]
fn the_url_is_the_public_secure_socket(world: &World) {
    let url = world.resolved().expect("default should resolve");
    assert_eq!(url.as_str(), "wss://newara.sparcs.org/ws");
}

#[then("the URL is the local development socket")]
fn the_url_is_the_local_development_socket(world: &World) {
    let url = world.resolved().expect("default should resolve");
    assert_eq!(url.as_str(), "ws://localhost:9000/ws");
}

#[then("the URL is the staging override")]
fn the_url_is_the_staging_override(world: &World) {
    let url = world.resolved().expect("override should resolve");
    assert_eq!(url.as_str(), STAGING_SOCKET_URL);
}

#[then("resolution fails with a scheme error")]
fn resolution_fails_with_a_scheme_error(world: &World) {
    match world.resolved() {
        Err(ConfigError::InvalidSocketScheme { scheme, .. }) => assert_eq!(scheme, "https"),
        other => panic!("Expected InvalidSocketScheme, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/socket_url.feature",
    name = "Production builds use the public socket"
)]
fn production_builds_use_the_public_socket(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/socket_url.feature",
    name = "Development builds use the local socket"
)]
fn development_builds_use_the_local_socket(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/socket_url.feature",
    name = "An explicit override wins over the environment"
)]
fn an_explicit_override_wins_over_the_environment(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/socket_url.feature",
    name = "An override with an HTTP scheme is rejected"
)]
fn an_override_with_an_http_scheme_is_rejected(world: World) {
    let _ = world;
}

//! Behaviour tests for the session lifecycle.
//!
//! These scenarios drive the session service against the demo accounts and a
//! file-backed store, restarting the service to prove what persists.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use teamboard::domain::{AuthError, Identity, LoginCredentials, Session};
use teamboard::inbound::{Navigation, RouteGuard};
use teamboard::test_support::{DemoSessionService, SessionSandbox};
use tokio::runtime::{Builder, Runtime};

struct LifecycleWorld {
    runtime: Runtime,
    sandbox: SessionSandbox,
    service: RefCell<DemoSessionService>,
    login: RefCell<Option<Result<Identity, AuthError>>>,
    navigation: RefCell<Option<Navigation>>,
}

impl LifecycleWorld {
    fn new() -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        let sandbox = SessionSandbox::new().expect("session sandbox");
        let service = sandbox.service().expect("demo service");
        Self {
            runtime,
            sandbox,
            service: RefCell::new(service),
            login: RefCell::new(None),
            navigation: RefCell::new(None),
        }
    }

    fn restart(&self) {
        let service = self.sandbox.service().expect("demo service");
        self.runtime.block_on(service.hydrate());
        *self.service.borrow_mut() = service;
    }

    fn sign_in(&self, email: &str, password: &str) {
        let credentials =
            LoginCredentials::try_from_parts(email, password).expect("credential shape");
        let service = self.service.borrow();
        let outcome = self.runtime.block_on(service.login(&credentials));
        *self.login.borrow_mut() = Some(outcome);
    }

    fn session(&self) -> Session {
        self.service.borrow().current_session()
    }
}

#[fixture]
fn world() -> LifecycleWorld {
    LifecycleWorld::new()
}

#[given("a hydrated dashboard session")]
fn a_hydrated_dashboard_session(world: &LifecycleWorld) {
    let service = world.service.borrow();
    world.runtime.block_on(service.hydrate());
}

#[given("a dashboard session that has not been hydrated")]
fn a_dashboard_session_that_has_not_been_hydrated(world: &LifecycleWorld) {
    assert!(world.service.borrow().is_pending());
}

#[given("a persisted snapshot containing a password field")]
fn a_persisted_snapshot_containing_a_password_field(world: &LifecycleWorld) {
    world
        .sandbox
        .write_snapshot(
            r#"{"id":"1","name":"John Manager","email":"manager@example.com","role":"EXECUTIVE_MANAGER","password":"password123"}"#,
        )
        .expect("write snapshot");
}

#[given("the user has signed in as {email} with password {password}")]
fn the_user_has_signed_in(world: &LifecycleWorld, email: String, password: String) {
    world.sign_in(&email, &password);
    assert!(world.session().is_authenticated());
}

#[when("the user signs in as {email} with password {password}")]
fn the_user_signs_in(world: &LifecycleWorld, email: String, password: String) {
    world.sign_in(&email, &password);
}

#[when("the user signs out")]
fn the_user_signs_out(world: &LifecycleWorld) {
    let service = world.service.borrow();
    world.runtime.block_on(service.logout());
}

#[when("the dashboard restarts")]
fn the_dashboard_restarts(world: &LifecycleWorld) {
    world.restart();
}

#[when("the user visits {path}")]
fn the_user_visits(world: &LifecycleWorld, path: String) {
    let state = world.service.borrow().state();
    *world.navigation.borrow_mut() = Some(RouteGuard::resolve(&path, &state));
}

#[then("the session belongs to {name}")]
fn the_session_belongs_to(world: &LifecycleWorld, name: String) {
    let session = world.session();
    let identity = session.identity().expect("signed-in identity");
    assert_eq!(identity.display_name().as_str(), name);
}

#[then("the persisted snapshot carries no password")]
fn the_persisted_snapshot_carries_no_password(world: &LifecycleWorld) {
    let snapshot = world
        .sandbox
        .snapshot()
        .expect("read snapshot")
        .expect("snapshot present");
    assert!(!snapshot.contains("password"));
}

#[then("the login is rejected as invalid credentials")]
fn the_login_is_rejected(world: &LifecycleWorld) {
    let login = world.login.borrow();
    let outcome = login.as_ref().expect("login attempted");
    assert_eq!(outcome.as_ref().err(), Some(&AuthError::InvalidCredentials));
}

#[then("the session is anonymous")]
fn the_session_is_anonymous(world: &LifecycleWorld) {
    assert!(!world.service.borrow().is_pending());
    assert_eq!(world.session(), Session::Anonymous);
}

#[then("no snapshot is persisted")]
fn no_snapshot_is_persisted(world: &LifecycleWorld) {
    assert_eq!(world.sandbox.snapshot().expect("read snapshot"), None);
}

#[then("the navigation is loading")]
fn the_navigation_is_loading(world: &LifecycleWorld) {
    assert_eq!(*world.navigation.borrow(), Some(Navigation::Loading));
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "Signing in survives a restart"
)]
fn signing_in_survives_a_restart(world: LifecycleWorld) {
    assert!(world.sandbox.snapshot().expect("read snapshot").is_some());
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "Rejected credentials leave the session anonymous"
)]
fn rejected_credentials_leave_the_session_anonymous(world: LifecycleWorld) {
    assert!(world.login.borrow().is_some());
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "A snapshot carrying a password is discarded"
)]
fn a_snapshot_carrying_a_password_is_discarded(world: LifecycleWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "Signing out clears the persisted session"
)]
fn signing_out_clears_the_persisted_session(world: LifecycleWorld) {
    assert!(world.login.borrow().as_ref().is_some_and(Result::is_ok));
    assert_eq!(world.session(), Session::Anonymous);
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "An unhydrated session shows a loading state"
)]
fn an_unhydrated_session_shows_a_loading_state(world: LifecycleWorld) {
    assert!(world.service.borrow().is_pending());
}

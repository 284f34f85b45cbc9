//! Test helpers for pytutor-server unit tests.

use axum_test::TestServer;

use pytutor_types::{AllowList, CompletionConfig, WidgetConfig};

use crate::router::build_router;
use crate::state::AppState;

pub const TEST_ORIGIN: &str = "https://learn.example.com";

/// Config with one allowed origin and no completion credential.
pub fn test_config() -> WidgetConfig {
    WidgetConfig {
        allow_origins: AllowList::parse(TEST_ORIGIN),
        completion: CompletionConfig::default(),
    }
}

/// Full router wrapped in an in-process test server.
pub fn test_server() -> TestServer {
    let state = AppState::new(test_config()).expect("failed to create test AppState");
    TestServer::new(build_router(state)).expect("failed to start test server")
}

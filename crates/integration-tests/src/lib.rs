//! Integration tests for the BRF Sjöutsikten portal.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p brf-portal-cli -- migrate
//! cargo run -p brf-portal-cli -- seed
//!
//! # Start the site
//! cargo run -p brf-portal-site
//!
//! # Run the tests against it
//! cargo test -p brf-portal-integration-tests -- --ignored
//! ```
//!
//! The tests are `#[ignore]`d by default because they need a running server
//! and database.

/// Base URL for the portal (configurable via environment).
#[must_use]
pub fn portal_base_url() -> String {
    std::env::var("PORTAL_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Create an HTTP client with a cookie store, so a login carries over to
/// later requests in the same test.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in as the test admin and return the client holding the session.
///
/// Expects an account created via:
/// `brf-cli admin create -e admin@test.local -p testlosenord -r admin`
///
/// # Panics
///
/// Panics if the login request fails.
pub async fn admin_client() -> reqwest::Client {
    let client = client();
    let base_url = portal_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("email", "admin@test.local"), ("password", "testlosenord")])
        .send()
        .await
        .expect("Failed to log in");

    assert!(
        resp.status().is_success() || resp.status().is_redirection(),
        "admin login failed: {}",
        resp.status()
    );

    client
}

//! Integration tests for the home page and content editing.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations and seed data
//! - The site running (cargo run -p brf-portal-site)
//! - A test admin account (brf-cli admin create -e admin@test.local -p testlosenord -r admin)
//!
//! Run with: cargo test -p brf-portal-integration-tests -- --ignored

use reqwest::StatusCode;

use brf_portal_integration_tests::{admin_client, client, portal_base_url};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn health_endpoint_responds() {
    let resp = client()
        .get(format!("{}/health", portal_base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running portal server and database"]
async fn readiness_checks_the_database() {
    let resp = client()
        .get(format!("{}/health/ready", portal_base_url()))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Home page
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded database"]
async fn home_renders_seeded_sections_in_title_order() {
    let resp = client()
        .get(portal_base_url())
        .send()
        .await
        .expect("Failed to get home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");

    // Seeded titles, ordered lexically.
    let foreningen = body.find("Föreningen").expect("Föreningen section");
    let gast = body.find("Gästlägenhet").expect("Gästlägenhet section");
    assert!(foreningen < gast);

    // The guest apartment section carries the booking widget.
    assert!(body.contains("booking-widget"));
}

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn guests_see_no_edit_controls() {
    let resp = client()
        .get(portal_base_url())
        .send()
        .await
        .expect("Failed to get home page");

    let body = resp.text().await.expect("body");
    assert!(!body.contains("Redigera"));
}

// ============================================================================
// Editing
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and test admin account"]
async fn admins_see_edit_controls() {
    let client = admin_client().await;

    let resp = client
        .get(portal_base_url())
        .send()
        .await
        .expect("Failed to get home page");

    let body = resp.text().await.expect("body");
    assert!(body.contains("Redigera"));
}

#[tokio::test]
#[ignore = "Requires running portal server and test admin account"]
async fn edit_form_requires_admin() {
    let base_url = portal_base_url();

    // Anonymous requests are redirected to login.
    let resp = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
        .get(format!("{base_url}/pages/1/edit"))
        .send()
        .await
        .expect("Failed to get edit page");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/auth/login");
}

#[tokio::test]
#[ignore = "Requires running portal server and test admin account"]
async fn saved_content_shows_up_on_the_home_page() {
    let client = admin_client().await;
    let base_url = portal_base_url();

    let marker = format!("<p>integration-test-{}</p>", std::process::id());

    let resp = client
        .post(format!("{base_url}/pages/1"))
        .form(&[("content", marker.as_str())])
        .send()
        .await
        .expect("Failed to save content");

    assert!(resp.status().is_success() || resp.status().is_redirection());

    let body = client
        .get(&base_url)
        .send()
        .await
        .expect("Failed to get home page")
        .text()
        .await
        .expect("body");

    assert!(body.contains(&marker));
}

//! Page editing route handlers.
//!
//! Admin-only. The edit form seeds its buffer from the persisted content;
//! saving replaces the content wholesale and redirects back to the section.
//! A failed save re-renders the editor with the buffer intact so nothing
//! typed is lost.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use brf_portal_core::PageId;

use crate::db::PageRepository;
use crate::editor::EditSession;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Edit form data.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub content: String,
}

/// Page edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/edit.html")]
pub struct EditPageTemplate {
    pub page_id: i32,
    pub title: String,
    pub buffer: String,
    pub save_failed: bool,
}

/// Display the edit form for a page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state))]
pub async fn edit_page(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<EditPageTemplate> {
    let page = PageRepository::new(state.pool())
        .get(PageId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("page {id}")))?;

    let session = EditSession::begin(page.id, page.content);

    Ok(EditPageTemplate {
        page_id: session.page_id().as_i32(),
        title: page.title,
        buffer: session.buffer().to_owned(),
        save_failed: false,
    })
}

/// Handle the edit form submission.
///
/// On success redirects back to the saved section. On a failed write the
/// editor re-renders with the submitted buffer so the admin may retry.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, form))]
pub async fn save_page(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<EditForm>,
) -> Result<Response> {
    let repo = PageRepository::new(state.pool());

    let page = repo
        .get(PageId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("page {id}")))?;

    let title = page.title.clone();
    let mut session = EditSession::begin(page.id, page.content);
    session
        .set_buffer(form.content)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let pending = session
        .begin_save()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match repo
        .update_content(pending.page_id, &pending.content, chrono::Utc::now())
        .await
    {
        Ok(()) => {
            session
                .save_succeeded()
                .map_err(|e| AppError::Internal(e.to_string()))?;
            tracing::info!(
                page_id = id,
                admin = %admin.email,
                "Page content saved"
            );
            Ok(Redirect::to(&format!("/#page-{id}")).into_response())
        }
        Err(e) => {
            session
                .save_failed()
                .map_err(|e| AppError::Internal(e.to_string()))?;
            sentry::capture_error(&e);
            tracing::error!(page_id = id, error = %e, "Failed to save page content");

            // Re-render the editor with the buffer preserved.
            Ok(EditPageTemplate {
                page_id: session.page_id().as_i32(),
                title,
                buffer: session.buffer().to_owned(),
                save_failed: true,
            }
            .into_response())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_posts_to_the_page_it_was_opened_for() {
        let html = EditPageTemplate {
            page_id: 5,
            title: "Alpha".to_owned(),
            buffer: "<p>draft</p>".to_owned(),
            save_failed: false,
        }
        .render()
        .unwrap();

        assert!(html.contains("action=\"/pages/5\""));
        assert!(html.contains("method=\"post\""));
        // The buffer seeds the textarea, HTML-escaped.
        assert!(html.contains("&lt;p&gt;draft&lt;/p&gt;"));
        assert!(html.contains("Spara"));
        assert!(html.contains("Avbryt"));
    }

    #[test]
    fn cancel_links_back_to_the_section() {
        let html = EditPageTemplate {
            page_id: 5,
            title: "Alpha".to_owned(),
            buffer: String::new(),
            save_failed: false,
        }
        .render()
        .unwrap();

        assert!(html.contains("href=\"/#page-5\""));
    }

    #[test]
    fn failed_save_keeps_the_buffer_in_the_form() {
        let html = EditPageTemplate {
            page_id: 5,
            title: "Alpha".to_owned(),
            buffer: "typed but not saved".to_owned(),
            save_failed: true,
        }
        .render()
        .unwrap();

        assert!(html.contains("typed but not saved"));
    }
}

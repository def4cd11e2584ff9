//! Home page route handler.
//!
//! Renders every content page as one scrollable section, with a sidebar
//! navigation on desktop and a dropdown on mobile. Which section counts as
//! active is decided client-side from scroll position.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::db::PageRepository;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::Page;
use crate::state::AppState;

/// One rendered section of the home page.
pub struct SectionView {
    /// Page ID; also the anchor target (`#page-{id}`).
    pub id: i32,
    /// Navigation label and section heading.
    pub title: String,
    /// Admin-authored HTML, injected verbatim.
    pub content: String,
    /// Whether the booking widget renders under the content.
    pub has_booking_widget: bool,
}

impl From<Page> for SectionView {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.as_i32(),
            title: page.title,
            content: page.content,
            has_booking_widget: page.kind.has_booking_widget(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub sections: Vec<SectionView>,
    pub is_admin: bool,
}

/// Display the home page with all content sections.
///
/// A failed page load renders the shell with an empty section list; the
/// failure is logged and captured, not shown to residents.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> impl IntoResponse {
    let pages = match PageRepository::new(state.pool()).list().await {
        Ok(pages) => pages,
        Err(e) => {
            sentry::capture_error(&e);
            tracing::error!(error = %e, "Failed to load pages for home");
            Vec::new()
        }
    };

    HomeTemplate {
        sections: pages.into_iter().map(SectionView::from).collect(),
        is_admin: user.is_some_and(|u| u.is_admin()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn section(id: i32, title: &str, content: &str) -> SectionView {
        SectionView {
            id,
            title: title.to_owned(),
            content: content.to_owned(),
            has_booking_widget: false,
        }
    }

    #[test]
    fn sections_render_in_given_order_with_anchors() {
        let html = HomeTemplate {
            sections: vec![
                section(1, "Alpha", "<p>first</p>"),
                section(2, "Beta", "<p>second</p>"),
            ],
            is_admin: false,
        }
        .render()
        .unwrap();

        let alpha = html.find("id=\"page-1\"").unwrap();
        let beta = html.find("id=\"page-2\"").unwrap();
        assert!(alpha < beta);
        // Content is injected verbatim, not escaped.
        assert!(html.contains("<p>first</p>"));
        assert!(html.contains("<p>second</p>"));
    }

    #[test]
    fn nav_lists_every_title() {
        let html = HomeTemplate {
            sections: vec![section(1, "Alpha", ""), section(2, "Beta", "")],
            is_admin: false,
        }
        .render()
        .unwrap();

        assert!(html.contains("href=\"#page-1\""));
        assert!(html.contains("href=\"#page-2\""));
        assert!(html.contains("Alpha"));
        assert!(html.contains("Beta"));
    }

    #[test]
    fn empty_page_list_still_renders_the_shell() {
        let html = HomeTemplate {
            sections: vec![],
            is_admin: false,
        }
        .render()
        .unwrap();

        assert!(html.contains("Välj sektion"));
        assert!(!html.contains("id=\"page-"));
    }

    #[test]
    fn edit_links_render_only_for_admins() {
        let sections = || vec![section(7, "Alpha", "<p>x</p>")];

        let guest = HomeTemplate {
            sections: sections(),
            is_admin: false,
        }
        .render()
        .unwrap();
        assert!(!guest.contains("/pages/7/edit"));

        let admin = HomeTemplate {
            sections: sections(),
            is_admin: true,
        }
        .render()
        .unwrap();
        assert!(admin.contains("/pages/7/edit"));
        assert!(admin.contains("Redigera"));
    }

    #[test]
    fn booking_widget_renders_only_where_flagged() {
        let mut apartment = section(3, "Gästlägenhet", "<p>info</p>");
        apartment.has_booking_widget = true;

        let html = HomeTemplate {
            sections: vec![section(1, "Alpha", ""), apartment],
            is_admin: false,
        }
        .render()
        .unwrap();

        assert_eq!(html.matches("booking-widget").count(), 1);
        // The widget belongs to section 3, after section 1's close.
        let widget = html.find("booking-widget").unwrap();
        let apartment_anchor = html.find("id=\"page-3\"").unwrap();
        assert!(widget > apartment_anchor);
    }

    #[test]
    fn empty_content_renders_an_empty_section_body() {
        let html = HomeTemplate {
            sections: vec![section(4, "Tom", "")],
            is_admin: false,
        }
        .render()
        .unwrap();

        assert!(html.contains("id=\"page-4\""));
        assert!(html.contains("Tom"));
    }
}

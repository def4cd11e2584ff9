//! Page kinds.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Legacy display title of the guest apartment page.
///
/// Earlier versions of the portal dispatched the booking widget on this
/// exact title string. The kind column replaces that, but the seeder still
/// recognises the title so imported content keeps its widget.
const GUEST_APARTMENT_TITLE: &str = "Gästlägenhet";

/// Kind of a content page.
///
/// Stored as lowercase text in the `pages.kind` column. Decides which extra
/// widgets render inside a page's section, decoupled from the display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Plain HTML content, nothing extra.
    #[default]
    Standard,
    /// Renders the guest apartment booking widget below the content.
    GuestApartment,
}

impl PageKind {
    /// The database representation of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::GuestApartment => "guest_apartment",
        }
    }

    /// Whether pages of this kind embed the booking widget.
    #[must_use]
    pub const fn has_booking_widget(self) -> bool {
        matches!(self, Self::GuestApartment)
    }

    /// Infer the kind for content imported from the legacy site, where the
    /// booking widget was keyed on the page title.
    #[must_use]
    pub fn infer_from_title(title: &str) -> Self {
        if title == GUEST_APARTMENT_TITLE {
            Self::GuestApartment
        } else {
            Self::Standard
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown page kind string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown page kind: {0}")]
pub struct ParsePageKindError(String);

impl FromStr for PageKind {
    type Err = ParsePageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "guest_apartment" => Ok(Self::GuestApartment),
            other => Err(ParsePageKindError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_guest_apartment_embeds_the_widget() {
        assert!(PageKind::GuestApartment.has_booking_widget());
        assert!(!PageKind::Standard.has_booking_widget());
    }

    #[test]
    fn legacy_title_maps_to_guest_apartment() {
        assert_eq!(
            PageKind::infer_from_title("Gästlägenhet"),
            PageKind::GuestApartment
        );
    }

    #[test]
    fn other_titles_map_to_standard() {
        assert_eq!(PageKind::infer_from_title("Tvättstuga"), PageKind::Standard);
        // The match is exact by design; a renamed page needs its kind set
        // explicitly rather than relying on the title.
        assert_eq!(
            PageKind::infer_from_title("gästlägenhet"),
            PageKind::Standard
        );
    }

    #[test]
    fn round_trips_through_as_str() {
        for kind in [PageKind::Standard, PageKind::GuestApartment] {
            assert_eq!(
                kind.as_str().parse::<PageKind>().expect("round trip"),
                kind
            );
        }
    }
}

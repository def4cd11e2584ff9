//! Slug derivation for page URLs.

/// Derive a URL-safe slug from a page title.
///
/// Lowercases, transliterates the Swedish letters å/ä/ö, collapses every
/// other non-alphanumeric run into a single hyphen, and trims leading and
/// trailing hyphens.
///
/// ```
/// use brf_portal_core::slugify;
///
/// assert_eq!(slugify("Gästlägenhet"), "gastlagenhet");
/// assert_eq!(slugify("Tvättstuga & Bokning"), "tvattstuga-bokning");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().map(transliterate) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Map Swedish letters to their ASCII base; pass everything else through.
const fn transliterate(c: char) -> char {
    match c {
        'å' | 'ä' | 'Å' | 'Ä' => 'a',
        'ö' | 'Ö' => 'o',
        'é' | 'É' => 'e',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn transliterates_swedish_letters() {
        assert_eq!(slugify("Gästlägenhet"), "gastlagenhet");
        assert_eq!(slugify("Styrelsen"), "styrelsen");
        assert_eq!(slugify("Sopor & Återvinning"), "sopor-atervinning");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("  Om   föreningen  "), "om-foreningen");
        assert_eq!(slugify("--a--b--"), "a-b");
    }

    #[test]
    fn non_ascii_that_is_not_mapped_is_dropped() {
        assert_eq!(slugify("Café №1"), "cafe-1");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}

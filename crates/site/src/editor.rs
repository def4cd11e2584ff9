//! Content edit workflow.
//!
//! Models the page edit lifecycle as one explicit state machine value
//! instead of independently-settable flags, so impossible combinations
//! (a save in flight with no edit open, a buffer with no page) cannot be
//! represented.
//!
//! ```text
//! Editing --begin_save--> Saving --save_succeeded--> Viewing
//!    ^                      |
//!    '-----save_failed------'
//! Editing --cancel--> Viewing
//! ```
//!
//! Route handlers drive one `EditSession` per request; the pure transitions
//! live here so the workflow rules are testable without a database.

use brf_portal_core::PageId;

/// Phase of the edit workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// No edit open; the persisted content is what renders.
    Viewing,
    /// An edit buffer is open and may diverge from the persisted content.
    Editing,
    /// A save request is in flight; the buffer is frozen.
    Saving,
}

/// Errors from illegal workflow transitions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    /// The requested transition requires the `Editing` phase.
    #[error("not editing (phase: {0:?})")]
    NotEditing(EditorPhase),
    /// The requested transition requires the `Saving` phase.
    #[error("no save in flight (phase: {0:?})")]
    NotSaving(EditorPhase),
}

/// The content and page identifier captured when a save starts.
///
/// The identifier is bound here, at submission time, so a save always
/// applies to the page it was issued for regardless of what the admin
/// views afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    /// Page the save applies to.
    pub page_id: PageId,
    /// Content going on the wire.
    pub content: String,
}

/// An edit session for a single page.
#[derive(Debug, Clone)]
pub struct EditSession {
    page_id: PageId,
    persisted: String,
    buffer: String,
    phase: EditorPhase,
}

impl EditSession {
    /// Open an edit session, seeding the buffer with the persisted content.
    #[must_use]
    pub fn begin(page_id: PageId, persisted: String) -> Self {
        let buffer = persisted.clone();
        Self {
            page_id,
            persisted,
            buffer,
            phase: EditorPhase::Editing,
        }
    }

    /// Replace the edit buffer.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NotEditing` outside the `Editing` phase; the
    /// buffer is frozen while a save is in flight.
    pub fn set_buffer(&mut self, content: String) -> Result<(), EditError> {
        if self.phase != EditorPhase::Editing {
            return Err(EditError::NotEditing(self.phase));
        }
        self.buffer = content;
        Ok(())
    }

    /// Discard buffer changes and return to viewing.
    ///
    /// The buffer is reset to the persisted content, so re-entering edit
    /// mode starts clean.
    pub fn cancel(&mut self) {
        self.buffer = self.persisted.clone();
        self.phase = EditorPhase::Viewing;
    }

    /// Start a save, capturing the page ID and buffer for the request.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NotEditing` if no edit is open or a save is
    /// already in flight (the save control is disabled while saving).
    pub fn begin_save(&mut self) -> Result<PendingSave, EditError> {
        if self.phase != EditorPhase::Editing {
            return Err(EditError::NotEditing(self.phase));
        }
        self.phase = EditorPhase::Saving;
        Ok(PendingSave {
            page_id: self.page_id,
            content: self.buffer.clone(),
        })
    }

    /// Record a successful save: the buffer becomes the persisted content.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NotSaving` if no save is in flight.
    pub fn save_succeeded(&mut self) -> Result<(), EditError> {
        if self.phase != EditorPhase::Saving {
            return Err(EditError::NotSaving(self.phase));
        }
        self.persisted = self.buffer.clone();
        self.phase = EditorPhase::Viewing;
        Ok(())
    }

    /// Record a failed save: stay in edit mode with the buffer preserved
    /// so the admin may retry.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NotSaving` if no save is in flight.
    pub fn save_failed(&mut self) -> Result<(), EditError> {
        if self.phase != EditorPhase::Saving {
            return Err(EditError::NotSaving(self.phase));
        }
        self.phase = EditorPhase::Editing;
        Ok(())
    }

    /// Page this session edits.
    #[must_use]
    pub const fn page_id(&self) -> PageId {
        self.page_id
    }

    /// Current edit buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Last known persisted content.
    #[must_use]
    pub fn persisted(&self) -> &str {
        &self.persisted
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Whether the save control should be enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.phase == EditorPhase::Editing
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        EditSession::begin(PageId::new(1), "<p>A</p>".to_owned())
    }

    #[test]
    fn begin_seeds_buffer_with_persisted_content() {
        let s = session();
        assert_eq!(s.buffer(), "<p>A</p>");
        assert_eq!(s.persisted(), "<p>A</p>");
        assert_eq!(s.phase(), EditorPhase::Editing);
    }

    #[test]
    fn cancel_discards_buffer_changes() {
        let mut s = session();
        s.set_buffer("<p>draft</p>".to_owned()).unwrap();
        s.cancel();
        assert_eq!(s.phase(), EditorPhase::Viewing);
        assert_eq!(s.buffer(), "<p>A</p>");
    }

    #[test]
    fn save_success_promotes_buffer_to_persisted() {
        let mut s = EditSession::begin(PageId::new(2), "<p>B</p>".to_owned());
        s.set_buffer("<p>B2</p>".to_owned()).unwrap();

        let pending = s.begin_save().unwrap();
        assert_eq!(pending.page_id, PageId::new(2));
        assert_eq!(pending.content, "<p>B2</p>");

        s.save_succeeded().unwrap();
        assert_eq!(s.phase(), EditorPhase::Viewing);
        assert_eq!(s.persisted(), "<p>B2</p>");
    }

    #[test]
    fn save_failure_keeps_editing_with_buffer_preserved() {
        let mut s = session();
        s.set_buffer("<p>draft</p>".to_owned()).unwrap();
        s.begin_save().unwrap();

        s.save_failed().unwrap();
        assert_eq!(s.phase(), EditorPhase::Editing);
        assert_eq!(s.buffer(), "<p>draft</p>");
        // Persisted content untouched; nothing was rolled back or applied.
        assert_eq!(s.persisted(), "<p>A</p>");
        // The admin may retry by submitting again.
        assert!(s.can_save());
    }

    #[test]
    fn buffer_is_frozen_while_saving() {
        let mut s = session();
        s.begin_save().unwrap();
        assert!(!s.can_save());
        assert_eq!(
            s.set_buffer("late edit".to_owned()),
            Err(EditError::NotEditing(EditorPhase::Saving))
        );
    }

    #[test]
    fn double_save_is_rejected() {
        let mut s = session();
        s.begin_save().unwrap();
        assert_eq!(
            s.begin_save().unwrap_err(),
            EditError::NotEditing(EditorPhase::Saving)
        );
    }

    #[test]
    fn completion_transitions_require_a_save_in_flight() {
        let mut s = session();
        assert_eq!(
            s.save_succeeded().unwrap_err(),
            EditError::NotSaving(EditorPhase::Editing)
        );
        assert_eq!(
            s.save_failed().unwrap_err(),
            EditError::NotSaving(EditorPhase::Editing)
        );
    }

    #[test]
    fn pending_save_binds_the_page_id_at_submission() {
        // A save issued for one page applies to that page even if another
        // session is opened afterwards.
        let mut first = EditSession::begin(PageId::new(1), String::new());
        first.set_buffer("<p>late</p>".to_owned()).unwrap();
        let pending = first.begin_save().unwrap();

        let second = EditSession::begin(PageId::new(2), "<p>other</p>".to_owned());
        assert_eq!(pending.page_id, PageId::new(1));
        assert_eq!(second.page_id(), PageId::new(2));
    }
}

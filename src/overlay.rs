//! Project overlay: open a project on top of the page, keep the background
//! still, and make the platform back action close it.
//!
//! The controller owns the selection and the bookkeeping for the one synthetic
//! history entry it pushes. Everything that touches the document goes
//! through [`OverlayHost`].

use crate::projects::ProjectId;

/// Document-level side effects the overlay needs.
pub trait OverlayHost {
    fn lock_scroll(&mut self);
    fn unlock_scroll(&mut self);
    /// Pushes an entry marked as belonging to the overlay.
    fn push_overlay_entry(&mut self);
    /// True if the current history entry is the one the overlay pushed.
    fn at_overlay_entry(&self) -> bool;
    fn history_back(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The close button.
    Explicit,
    /// A click outside the panel.
    Backdrop,
    /// The platform already popped our entry.
    HistoryBack,
    /// The owning component is going away.
    Teardown,
    /// A navigation is about to replace our entry in place.
    Replaced,
}

#[derive(Debug)]
pub struct OverlayController<H: OverlayHost> {
    host: H,
    selected: Option<ProjectId>,
    pushed_entry: bool,
}

impl<H: OverlayHost> OverlayController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            selected: None,
            pushed_entry: false,
        }
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Shows `id`. Switching projects while open reuses the same history
    /// entry and scroll lock.
    pub fn open(&mut self, id: ProjectId) {
        if self.selected.replace(id).is_some() {
            log::debug!("overlay: switched to project {id}");
            return;
        }
        log::debug!("overlay: opened project {id}");
        self.host.lock_scroll();
        self.host.push_overlay_entry();
        self.pushed_entry = true;
    }

    /// Returns `false` if nothing was open. Safe to call repeatedly, which
    /// absorbs the pop event that our own rollback triggers.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        log::debug!("overlay: closed project {id} ({reason:?})");
        self.host.unlock_scroll();
        if std::mem::take(&mut self.pushed_entry)
            && !matches!(reason, CloseReason::HistoryBack | CloseReason::Replaced)
            && self.host.at_overlay_entry()
        {
            self.host.history_back();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Entry {
        Page,
        Overlay,
        Route(&'static str),
    }

    /// In-memory document: a history stack and a scroll flag.
    #[derive(Debug)]
    struct FakeDocument {
        history: Vec<Entry>,
        scroll_locked: bool,
        backs: usize,
    }

    impl FakeDocument {
        fn new() -> Self {
            Self {
                history: vec![Entry::Page],
                scroll_locked: false,
                backs: 0,
            }
        }

        fn overlay_entries(&self) -> usize {
            self.history.iter().filter(|e| **e == Entry::Overlay).count()
        }
    }

    impl OverlayHost for FakeDocument {
        fn lock_scroll(&mut self) {
            self.scroll_locked = true;
        }

        fn unlock_scroll(&mut self) {
            self.scroll_locked = false;
        }

        fn push_overlay_entry(&mut self) {
            self.history.push(Entry::Overlay);
        }

        fn at_overlay_entry(&self) -> bool {
            self.history.last() == Some(&Entry::Overlay)
        }

        fn history_back(&mut self) {
            self.backs += 1;
            self.history.pop();
        }
    }

    fn opened() -> OverlayController<FakeDocument> {
        let mut overlay = OverlayController::new(FakeDocument::new());
        overlay.open(ProjectId(2));
        assert!(overlay.host().scroll_locked);
        assert_eq!(overlay.host().history, vec![Entry::Page, Entry::Overlay]);
        overlay
    }

    fn assert_clean(overlay: &OverlayController<FakeDocument>) {
        assert!(!overlay.is_open());
        assert_eq!(overlay.selected(), None);
        assert!(!overlay.host().scroll_locked);
        assert_eq!(overlay.host().overlay_entries(), 0);
        assert_eq!(overlay.host().history, vec![Entry::Page]);
    }

    #[test]
    fn test_close_button() {
        let mut overlay = opened();
        assert!(overlay.close(CloseReason::Explicit));
        // the rollback fires a pop event, which closes again
        assert!(!overlay.close(CloseReason::HistoryBack));
        assert_clean(&overlay);
        assert_eq!(overlay.host().backs, 1);
    }

    #[test]
    fn test_backdrop_click() {
        let mut overlay = opened();
        assert!(overlay.close(CloseReason::Backdrop));
        assert!(!overlay.close(CloseReason::HistoryBack));
        assert_clean(&overlay);
        assert_eq!(overlay.host().backs, 1);
    }

    #[test]
    fn test_platform_back() {
        let mut overlay = opened();
        // the platform pops the entry before telling us
        overlay.host.history.pop();
        assert!(overlay.close(CloseReason::HistoryBack));
        assert_clean(&overlay);
        assert_eq!(overlay.host().backs, 0);
    }

    #[test]
    fn test_teardown_releases_scroll() {
        let mut overlay = opened();
        assert!(overlay.close(CloseReason::Teardown));
        assert_clean(&overlay);
    }

    #[test]
    fn test_teardown_after_navigation_leaves_history_alone() {
        let mut overlay = opened();
        overlay.host.history.push(Entry::Route("/projects/2"));
        assert!(overlay.close(CloseReason::Teardown));
        assert!(!overlay.host().scroll_locked);
        assert_eq!(overlay.host().backs, 0);
        assert_eq!(
            overlay.host().history.last(),
            Some(&Entry::Route("/projects/2"))
        );
    }

    #[test]
    fn test_replaced_by_navigation() {
        let mut overlay = opened();
        assert!(overlay.close(CloseReason::Replaced));
        assert!(!overlay.host().scroll_locked);
        assert_eq!(overlay.host().backs, 0);
        // the router swaps our entry for the new route
        *overlay.host.history.last_mut().unwrap() = Entry::Route("/projects/2");
        assert!(!overlay.close(CloseReason::Teardown));
        assert_eq!(
            overlay.host().history,
            vec![Entry::Page, Entry::Route("/projects/2")]
        );
    }

    #[test]
    fn test_switching_projects_pushes_once() {
        let mut overlay = opened();
        overlay.open(ProjectId(3));
        assert_eq!(overlay.selected(), Some(ProjectId(3)));
        assert_eq!(overlay.host().overlay_entries(), 1);
        overlay.close(CloseReason::Explicit);
        assert_clean(&overlay);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut overlay = OverlayController::new(FakeDocument::new());
        for reason in [
            CloseReason::Explicit,
            CloseReason::Backdrop,
            CloseReason::HistoryBack,
            CloseReason::Teardown,
            CloseReason::Replaced,
        ] {
            assert!(!overlay.close(reason));
        }
        assert_clean(&overlay);
        assert_eq!(overlay.host().backs, 0);
    }

    #[test]
    fn test_reopen_after_close() {
        let mut overlay = opened();
        overlay.close(CloseReason::Explicit);
        overlay.open(ProjectId(1));
        assert_eq!(overlay.host().overlay_entries(), 1);
        overlay.host.history.pop();
        overlay.close(CloseReason::HistoryBack);
        assert_clean(&overlay);
    }
}

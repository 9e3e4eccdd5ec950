//! Selection session - which page the shell shows
//!
//! Holds the caller's profile choice and administration sub-page for the
//! lifetime of one session. Nothing is persisted beyond it.

use serde::Serialize;

use crate::composer::{AdminPage, Profile, ProfileKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSession {
    kind: ProfileKind,
    admin_page: AdminPage,
}

impl SelectionSession {
    /// New session on the primary profile with the dashboard pre-selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, kind: ProfileKind) {
        log::debug!("Selected profile {kind:?}");
        self.kind = kind;
    }

    /// Choose the administration sub-page
    ///
    /// The choice is kept while the primary profile is shown and applies again
    /// when the session returns to administration.
    pub fn select_admin_page(&mut self, page: AdminPage) {
        log::debug!("Selected admin page {page}");
        self.admin_page = page;
    }

    #[must_use]
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    #[must_use]
    pub fn admin_page(&self) -> AdminPage {
        self.admin_page
    }

    /// The concrete profile to compose
    #[must_use]
    pub fn current_profile(&self) -> Profile {
        match self.kind {
            ProfileKind::Primary => Profile::Primary,
            ProfileKind::Administration => Profile::Administration(self.admin_page),
        }
    }
}

//! Session state machine.
//!
//! Tracks one user's position through the four screens
//! (Home → Category1 → Category2 → Result) and the committed category
//! selections. Transitions are total: an invalid precondition never fails,
//! it produces a state the renderer handles (an absent pick renders as the
//! no-match screen). The session never formats markup; `payload` returns
//! plain data for whatever front end is attached.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, Entry};
use crate::facets;
use crate::pick::{self, Constraint};

/// Sentinel category1 label meaning "ignore all constraints".
pub const RANDOM_LABEL: &str = "Random";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Category1,
    Category2,
    Result,
}

/// Renderable data for the current page. The presentation layer draws
/// this; the session owns no rendering concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePayload {
    Home,
    /// Sorted category1 facets, with the synthetic [`RANDOM_LABEL`] entry
    /// appended when not already present.
    Category1 { choices: Vec<String> },
    Category2 {
        category1: Option<String>,
        choices: Vec<String>,
    },
    /// `pick: None` is the explicit no-match signal.
    Result {
        category1: Option<String>,
        category2: Option<String>,
        pick: Option<Entry>,
    },
}

pub struct Session<'a, R: Rng> {
    catalog: &'a Catalog,
    page: Page,
    category1: Option<String>,
    category2: Option<String>,
    current_pick: Option<Entry>,
    rng: R,
}

impl<'a> Session<'a, StdRng> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }
}

impl<'a, R: Rng> Session<'a, R> {
    /// Start a session with a caller-supplied RNG (seeded in tests).
    pub fn with_rng(catalog: &'a Catalog, rng: R) -> Self {
        Self {
            catalog,
            page: Page::Home,
            category1: None,
            category2: None,
            current_pick: None,
            rng,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_category1(&self) -> Option<&str> {
        self.category1.as_deref()
    }

    pub fn selected_category2(&self) -> Option<&str> {
        self.category2.as_deref()
    }

    pub fn current_pick(&self) -> Option<&Entry> {
        self.current_pick.as_ref()
    }

    /// Home → Category1.
    pub fn start(&mut self) {
        self.page = Page::Category1;
    }

    /// Commit a first-level category. The [`RANDOM_LABEL`] sentinel skips
    /// the second level entirely: it picks from the whole catalog and
    /// jumps straight to Result.
    pub fn choose_category1(&mut self, label: &str) {
        if label == RANDOM_LABEL {
            self.category1 = Some(RANDOM_LABEL.to_string());
            self.category2 = None;
            self.current_pick =
                pick::pick(self.catalog, &Constraint::any(), &mut self.rng).cloned();
            self.page = Page::Result;
            return;
        }
        self.category1 = Some(label.to_string());
        self.category2 = None;
        self.current_pick = None;
        self.page = Page::Category2;
    }

    /// Commit a second-level category, pick within the committed pair and
    /// move to Result.
    pub fn choose_category2(&mut self, label: &str) {
        self.category2 = Some(label.to_string());
        let constraint = Constraint {
            category1: self.category1.clone(),
            category2: Some(label.to_string()),
        };
        self.current_pick = pick::pick(self.catalog, &constraint, &mut self.rng).cloned();
        self.page = Page::Result;
    }

    /// Draw again under the committed constraint. Only meaningful on the
    /// Result page; a no-op elsewhere. Repeats are allowed and expected.
    pub fn reroll(&mut self) {
        if self.page != Page::Result {
            return;
        }
        let constraint = self.constraint();
        self.current_pick = pick::pick(self.catalog, &constraint, &mut self.rng).cloned();
    }

    /// Move to an earlier page without clearing the committed selections.
    pub fn go_back(&mut self, target: Page) {
        self.page = target;
    }

    /// Back to the initial state, unconditionally.
    pub fn reset(&mut self) {
        self.page = Page::Home;
        self.category1 = None;
        self.category2 = None;
        self.current_pick = None;
    }

    /// Renderable data for the current page.
    pub fn payload(&self) -> PagePayload {
        match self.page {
            Page::Home => PagePayload::Home,
            Page::Category1 => {
                let mut choices = facets::category1_values(self.catalog);
                if !choices.iter().any(|c| c == RANDOM_LABEL) {
                    choices.push(RANDOM_LABEL.to_string());
                }
                PagePayload::Category1 { choices }
            }
            Page::Category2 => PagePayload::Category2 {
                category1: self.category1.clone(),
                choices: self
                    .category1
                    .as_deref()
                    .map(|c1| facets::category2_values(self.catalog, c1))
                    .unwrap_or_default(),
            },
            Page::Result => PagePayload::Result {
                category1: self.category1.clone(),
                category2: self.category2.clone(),
                pick: self.current_pick.clone(),
            },
        }
    }

    /// The committed filter: the Random sentinel means unconstrained.
    fn constraint(&self) -> Constraint {
        if self.category1.as_deref() == Some(RANDOM_LABEL) {
            return Constraint::any();
        }
        Constraint {
            category1: self.category1.clone(),
            category2: self.category2.clone(),
        }
    }
}

//! Report aggregation
//!
//! Collects update outcomes in discovery order and renders them as the text
//! delivered to the notification sink.

mod text;

pub use text::{print_summary, render, RenderOptions, NO_UPDATES_LINE, REGRESSION_MARKER};

use crate::domain::UpdateOutcome;
use chrono::NaiveDate;

/// Outcomes of a single run, in the order manifests were discovered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    date: NaiveDate,
    outcomes: Vec<UpdateOutcome>,
}

impl Report {
    /// Create an empty report stamped with `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            outcomes: Vec::new(),
        }
    }

    /// Create an empty report stamped with today's local date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn push(&mut self, outcome: UpdateOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn outcomes(&self) -> &[UpdateOutcome] {
        &self.outcomes
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Outcomes whose declared version is ahead of upstream
    pub fn regressions(&self) -> impl Iterator<Item = &UpdateOutcome> {
        self.outcomes.iter().filter(|o| o.is_regression)
    }

    /// Outcomes with a genuine update available
    pub fn updates(&self) -> impl Iterator<Item = &UpdateOutcome> {
        self.outcomes.iter().filter(|o| !o.is_regression)
    }
}

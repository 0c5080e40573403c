//! Transient view state owned by the rendering layer
//!
//! Nothing in here is ever read by the figure functions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Collapsible sections of the statement panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    Summary,
    Transactions,
}

/// Document dialogs that can be opened from the statement panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentDialog {
    /// Full statement document
    Statement,
    /// Transactions-only export
    TransactionsOnly,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    expanded: BTreeSet<Section>,
    detailed_summary: bool,
    dialog: Option<DocumentDialog>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a collapsed section or collapse an expanded one
    pub fn toggle_section(&mut self, section: Section) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded.contains(&section)
    }

    /// Switch between the compact table and the detailed summary
    pub fn toggle_detailed_summary(&mut self) {
        self.detailed_summary = !self.detailed_summary;
    }

    pub fn shows_detailed_summary(&self) -> bool {
        self.detailed_summary
    }

    /// Open a document dialog, replacing any open one
    pub fn open_dialog(&mut self, dialog: DocumentDialog) {
        self.dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn dialog(&self) -> Option<DocumentDialog> {
        self.dialog
    }
}

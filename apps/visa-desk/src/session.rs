//! Checklist confirmation state for one loaded document
//!
//! Items are tracked by position. Loading a new document resets the state;
//! the engine and its results never see it.

use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `index` is 0-based; the message shows the 1-based number the agent typed
    #[error("{}. madde bulunamadı (listede {len} madde var)", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default)]
pub struct ChecklistSession {
    items: Vec<String>,
    checked: BTreeSet<usize>,
}

impl ChecklistSession {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            checked: BTreeSet::new(),
        }
    }

    /// Start over with a freshly loaded document's checklist
    pub fn reset(&mut self, items: Vec<String>) {
        self.items = items;
        self.checked.clear();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    /// Flip one item; returns its new state
    pub fn toggle(&mut self, index: usize) -> Result<bool, SessionError> {
        let now_checked = !self.is_checked(index);
        self.set(index, now_checked)?;
        Ok(now_checked)
    }

    pub fn set(&mut self, index: usize, checked: bool) -> Result<(), SessionError> {
        if index >= self.items.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        if checked {
            self.checked.insert(index);
        } else {
            self.checked.remove(&index);
        }
        Ok(())
    }

    pub fn check_all(&mut self) {
        self.checked = (0..self.items.len()).collect();
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Fraction of items confirmed, 0.0 for an empty list
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            0.0
        } else {
            self.checked.len() as f64 / self.items.len() as f64
        }
    }

    /// Whole percent, truncated
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0) as u8
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: progress stays within 0..=100 whatever is toggled
        #[test]
        fn progress_bounded(len in 0usize..20, toggles in prop::collection::vec(0usize..25, 0..40)) {
            let mut s = ChecklistSession::new(vec!["x".to_string(); len]);
            for index in toggles {
                let _ = s.toggle(index);
            }
            prop_assert!(s.progress_percent() <= 100);
            prop_assert!(s.checked_count() <= len);
        }

        /// Property: toggling the same item twice restores the original state
        #[test]
        fn double_toggle_is_identity(len in 1usize..20, index in 0usize..20) {
            prop_assume!(index < len);
            let mut s = ChecklistSession::new(vec!["x".to_string(); len]);
            let before = s.is_checked(index);
            s.toggle(index).unwrap();
            s.toggle(index).unwrap();
            prop_assert_eq!(s.is_checked(index), before);
        }
    }
}

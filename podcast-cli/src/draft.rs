//! Editable text mirror of a committed numeric value.
//!
//! The committed value is canonical. While focused, the user edits a
//! separate draft string; committing parses the draft and, if it is a
//! valid amount, replaces the committed value. Invalid text never reaches
//! the committed value: the last good value is kept instead.

use tracing::warn;

use crate::utils::{format_amount, parse_amount};

#[derive(Debug, Clone, PartialEq)]
pub struct DraftNumber {
    committed: f64,
    draft: String,
    focused: bool,
}

impl DraftNumber {
    pub fn new(value: f64) -> Self {
        Self {
            committed: value,
            draft: String::new(),
            focused: false,
        }
    }

    /// Starts editing with an empty draft.
    pub fn focus(&mut self) {
        self.focused = true;
        self.draft.clear();
    }

    /// Replaces the draft text.
    ///
    /// Whole numbers are regrouped with separators as they are typed
    /// (`"12345"` becomes `"12,345"`); anything with a decimal point or that
    /// does not parse is kept as typed.
    pub fn input(
        &mut self,
        text: &str,
    ) {
        if !self.focused {
            self.focus();
        }
        self.draft = match parse_amount(text) {
            Ok(value) if !text.contains('.') => format_amount(value),
            _ => text.to_string(),
        };
    }

    /// Ends editing and returns the resulting committed value.
    pub fn commit(&mut self) -> f64 {
        if self.focused && !self.draft.trim().is_empty() {
            match parse_amount(&self.draft) {
                Ok(value) => self.committed = value,
                Err(error) => {
                    warn!(%error, kept = self.committed, "ignoring invalid amount")
                }
            }
        }
        self.focused = false;
        self.draft.clear();
        self.committed
    }

    /// Text to show: the draft while editing, the formatted value otherwise.
    pub fn display(&self) -> String {
        if self.focused {
            self.draft.clone()
        } else {
            format_amount(self.committed)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_formats_committed_value_when_idle() {
        let draft = DraftNumber::new(1_000_000.0);

        assert_eq!(draft.display(), "1,000,000");
    }

    #[test]
    fn focus_starts_with_empty_draft() {
        let mut draft = DraftNumber::new(42.0);

        draft.focus();

        assert_eq!(draft.display(), "");
    }

    #[test]
    fn input_regroups_whole_numbers() {
        let mut draft = DraftNumber::new(0.0);
        draft.focus();

        draft.input("12345");

        assert_eq!(draft.display(), "12,345");
    }

    #[test]
    fn input_keeps_partial_decimals_as_typed() {
        let mut draft = DraftNumber::new(0.0);
        draft.focus();

        draft.input("12.");

        assert_eq!(draft.display(), "12.");
    }

    #[test]
    fn commit_replaces_value_when_valid() {
        let mut draft = DraftNumber::new(10.0);
        draft.focus();
        draft.input("1,500");

        assert_eq!(draft.commit(), 1_500.0);
        assert_eq!(draft.display(), "1,500");
    }

    #[test]
    fn commit_keeps_last_good_value_on_garbage() {
        let mut draft = DraftNumber::new(30.0);
        draft.focus();
        draft.input("thirty");

        assert_eq!(draft.commit(), 30.0);
        assert_eq!(draft.display(), "30");
    }

    #[test]
    fn commit_without_typing_keeps_value() {
        let mut draft = DraftNumber::new(30.0);
        draft.focus();

        assert_eq!(draft.commit(), 30.0);
    }
}

//! Result and input types shared by the selector entry points.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// The outcome of a menu selection.
///
/// A cancelled session (Ctrl+C, a broken input stream or an empty option
/// list) is `Cancelled`; callers that want the `(index, text)` pair shape use
/// [`MenuChoice::as_pair`], which reports cancellation as `(-1, "")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Selected { index: usize, text: String },
    Cancelled,
}

impl MenuChoice {
    #[must_use]
    pub fn selected(index: usize, text: &str) -> Self {
        Self::Selected {
            index,
            text: text.to_string(),
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, MenuChoice::Cancelled)
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            MenuChoice::Selected { index, .. } => Some(*index),
            MenuChoice::Cancelled => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            MenuChoice::Selected { text, .. } => Some(text),
            MenuChoice::Cancelled => None,
        }
    }

    /// Returns `(index, text)`, or `(-1, "")` when cancelled.
    #[must_use]
    pub fn as_pair(&self) -> (isize, &str) {
        match self {
            MenuChoice::Selected { index, text } => {
                (isize::try_from(*index).unwrap_or(isize::MAX), text.as_str())
            }
            MenuChoice::Cancelled => (-1, ""),
        }
    }
}

/// A confirmation default given as text, the way shell callers pass it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDefault {
    Yes,
    No,
}

impl FromStr for ConfirmDefault {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "y" | "yes" | "true" => Ok(ConfirmDefault::Yes),
            "n" | "no" | "false" => Ok(ConfirmDefault::No),
            _ => Err(Error::InvalidConfirmDefault(value.to_string())),
        }
    }
}

impl From<bool> for ConfirmDefault {
    fn from(value: bool) -> Self {
        if value {
            ConfirmDefault::Yes
        } else {
            ConfirmDefault::No
        }
    }
}

impl From<ConfirmDefault> for bool {
    fn from(value: ConfirmDefault) -> Self {
        value == ConfirmDefault::Yes
    }
}

impl Display for ConfirmDefault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmDefault::Yes => f.write_str("y"),
            ConfirmDefault::No => f.write_str("n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_pair_for_selection() {
        let choice = MenuChoice::selected(2, "gamma");
        assert_eq!(choice.as_pair(), (2, "gamma"));
        assert_eq!(choice.index(), Some(2));
        assert_eq!(choice.text(), Some("gamma"));
        assert!(!choice.is_cancelled());
    }

    #[test]
    fn test_menu_choice_pair_for_cancellation() {
        let choice = MenuChoice::Cancelled;
        assert_eq!(choice.as_pair(), (-1, ""));
        assert_eq!(choice.index(), None);
        assert!(choice.is_cancelled());
    }

    #[test]
    fn test_confirm_default_parsing() {
        for yes in ["y", "Y", "yes", "YES", "true", " True "] {
            assert_eq!(yes.parse::<ConfirmDefault>().unwrap(), ConfirmDefault::Yes);
        }
        for no in ["n", "No", "false", "FALSE"] {
            assert_eq!(no.parse::<ConfirmDefault>().unwrap(), ConfirmDefault::No);
        }
    }

    #[test]
    fn test_confirm_default_rejects_unknown_text() {
        let result = "maybe".parse::<ConfirmDefault>();
        assert!(matches!(result, Err(Error::InvalidConfirmDefault(ref v)) if v == "maybe"));
    }

    #[test]
    fn test_confirm_default_bool_conversion() {
        assert!(bool::from(ConfirmDefault::from(true)));
        assert!(!bool::from(ConfirmDefault::from(false)));
        assert_eq!(ConfirmDefault::Yes.to_string(), "y");
    }
}

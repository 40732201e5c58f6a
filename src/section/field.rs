//! Field-level validation results

use crate::i18n::{Translator, keys};

/// Editable text field of a section or one of its links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Icon,
    Name,
    Value,
}

impl Field {
    fn blank_key(&self) -> &'static str {
        match self {
            Self::Title => keys::TITLE_BLANK,
            Self::Icon => keys::ICON_BLANK,
            Self::Name => keys::NAME_BLANK,
            Self::Value => keys::VALUE_BLANK,
        }
    }

    fn maximum_key(&self) -> &'static str {
        match self {
            Self::Title => keys::TITLE_MAXIMUM,
            Self::Icon => keys::ICON_MAXIMUM,
            Self::Name => keys::NAME_MAXIMUM,
            Self::Value => keys::VALUE_MAXIMUM,
        }
    }
}

/// First failing rule of a field, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Blank,
    TooLong { max: usize },
    /// Only produced for link values
    Invalid,
}

impl FieldError {
    pub fn message(&self, field: Field, translator: &dyn Translator) -> String {
        match self {
            FieldError::Blank => translator.translate(field.blank_key(), &[]),
            FieldError::TooLong { max } => {
                translator.translate(field.maximum_key(), &[("count", max.to_string())])
            }
            FieldError::Invalid => translator.translate(keys::VALUE_INVALID, &[]),
        }
    }
}

/// Blank and length checks shared by every text field.
///
/// Blank means absent or empty; whitespace counts as content.
pub(crate) fn check_text(value: Option<&str>, max: usize) -> Option<FieldError> {
    match value {
        None | Some("") => Some(FieldError::Blank),
        Some(v) if v.chars().count() > max => Some(FieldError::TooLong { max }),
        Some(_) => None,
    }
}

/// CSS class the form uses to highlight a field.
pub(crate) fn css_class(touched: bool, valid: bool) -> &'static str {
    if !touched || valid { "" } else { "warning" }
}

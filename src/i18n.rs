//! Localized string lookup
//!
//! The editor never hard-codes user facing text; every message goes through a
//! [`Translator`]. [`EnglishCatalog`] carries the English strings for all keys
//! the editor uses.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Localized string lookup service.
pub trait Translator: Send + Sync {
    /// Look up `key` and substitute `%{name}` placeholders from `interpolations`.
    fn translate(&self, key: &str, interpolations: &[(&str, String)]) -> String;
}

pub mod keys {
    pub const TITLE_BLANK: &str = "sidebar.sections.custom.title.validation.blank";
    pub const TITLE_MAXIMUM: &str = "sidebar.sections.custom.title.validation.maximum";
    pub const ICON_BLANK: &str = "sidebar.sections.custom.links.icon.validation.blank";
    pub const ICON_MAXIMUM: &str = "sidebar.sections.custom.links.icon.validation.maximum";
    pub const NAME_BLANK: &str = "sidebar.sections.custom.links.name.validation.blank";
    pub const NAME_MAXIMUM: &str = "sidebar.sections.custom.links.name.validation.maximum";
    pub const VALUE_BLANK: &str = "sidebar.sections.custom.links.value.validation.blank";
    pub const VALUE_MAXIMUM: &str = "sidebar.sections.custom.links.value.validation.maximum";
    pub const VALUE_INVALID: &str = "sidebar.sections.custom.links.value.validation.invalid";
    pub const HEADER_ADD: &str = "sidebar.sections.custom.add";
    pub const HEADER_EDIT: &str = "sidebar.sections.custom.edit";
    pub const DELETE_CONFIRM: &str = "sidebar.sections.custom.delete_confirm";
    pub const RESET_CONFIRM: &str = "sidebar.sections.custom.reset_confirm";
    pub const GENERIC_ERROR: &str = "generic_error";
    pub const NETWORK_ERROR: &str = "network_error";
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (keys::TITLE_BLANK, "Title cannot be blank"),
        (keys::TITLE_MAXIMUM, "Title must be shorter than %{count} characters"),
        (keys::ICON_BLANK, "Icon cannot be blank"),
        (keys::ICON_MAXIMUM, "Icon must be shorter than %{count} characters"),
        (keys::NAME_BLANK, "Name cannot be blank"),
        (keys::NAME_MAXIMUM, "Name must be shorter than %{count} characters"),
        (keys::VALUE_BLANK, "Link cannot be blank"),
        (keys::VALUE_MAXIMUM, "Link must be shorter than %{count} characters"),
        (keys::VALUE_INVALID, "Format is invalid"),
        (keys::HEADER_ADD, "Add custom section"),
        (keys::HEADER_EDIT, "Edit custom section"),
        (
            keys::DELETE_CONFIRM,
            "Are you sure you want to delete this section?",
        ),
        (
            keys::RESET_CONFIRM,
            "Are you sure you want to reset this section to default?",
        ),
        (keys::GENERIC_ERROR, "Sorry, an error has occurred."),
        (
            keys::NETWORK_ERROR,
            "Sorry, it seems like we can't reach this site. Please try again later.",
        ),
    ])
});

/// Built-in English strings. Unknown keys render as `[en.<key>]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishCatalog;

impl Translator for EnglishCatalog {
    fn translate(&self, key: &str, interpolations: &[(&str, String)]) -> String {
        match EN.get(key) {
            Some(template) => interpolate(template, interpolations),
            None => format!("[en.{}]", key),
        }
    }
}

/// Replace every `%{name}` in `template`. Placeholders without a value are left as is.
pub fn interpolate(template: &str, interpolations: &[(&str, String)]) -> String {
    interpolations
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("%{{{}}}", name), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_with_count() {
        let msg = EnglishCatalog.translate(keys::NAME_MAXIMUM, &[("count", "80".to_string())]);
        assert_eq!(msg, "Name must be shorter than 80 characters");
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(EnglishCatalog.translate("nope.missing", &[]), "[en.nope.missing]");
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("%{a} and %{b}", &[("a", "1".into())]), "1 and %{b}");
    }
}

//! A single link row of a custom sidebar section

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};
use url::Url;

use super::ValidationContext;
use super::field::{Field, FieldError, check_text, css_class};
use crate::models::SidebarUrlData;
use crate::routing::is_full_reload_path;

/// Icon given to links that do not name one.
pub const DEFAULT_ICON: &str = "link";

/// Which of the two ordered lists a link belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Segment {
    #[default]
    Primary,
    Secondary,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for Segment {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(format!(
                "Invalid segment: '{}'. Valid: primary, secondary",
                s
            )),
        }
    }
}

/// Editable link entry.
///
/// `None` fields are untouched: they are invalid but produce no message yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLink {
    pub id: Option<i64>,
    /// Session-local identity, never sent to the server
    pub object_id: u64,
    pub icon: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub segment: Segment,
    pub marked_for_deletion: bool,
}

impl SectionLink {
    /// Blank row with the default icon.
    pub fn new(object_id: u64, segment: Segment) -> Self {
        Self {
            id: None,
            object_id,
            icon: Some(DEFAULT_ICON.to_string()),
            name: None,
            value: None,
            segment,
            marked_for_deletion: false,
        }
    }

    pub fn from_persisted(data: &SidebarUrlData, object_id: u64) -> Self {
        let icon = match data.icon.as_deref() {
            None | Some("") => DEFAULT_ICON.to_string(),
            Some(icon) => icon.to_string(),
        };
        Self {
            id: data.id,
            object_id,
            icon: Some(icon),
            name: data.name.clone(),
            value: data.value.clone(),
            segment: data.segment,
            marked_for_deletion: false,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.segment == Segment::Primary
    }

    /// Value with the current origin stripped.
    pub fn path<'a>(&'a self, ctx: &ValidationContext) -> Option<&'a str> {
        self.value.as_deref().map(|v| ctx.origin.strip(v))
    }

    /// Non-empty value pointing outside the current site.
    pub fn external(&self, ctx: &ValidationContext) -> bool {
        match self.value.as_deref() {
            None | Some("") => false,
            Some(v) => !(ctx.origin.is_same_origin(v) || v.starts_with('/')),
        }
    }

    pub fn icon_error(&self, ctx: &ValidationContext) -> Option<FieldError> {
        check_text(self.icon.as_deref(), ctx.limits.max_icon_length)
    }

    pub fn name_error(&self, ctx: &ValidationContext) -> Option<FieldError> {
        check_text(self.name.as_deref(), ctx.limits.max_name_length)
    }

    /// Blank, then too long, then malformed.
    pub fn value_error(&self, ctx: &ValidationContext) -> Option<FieldError> {
        check_text(self.value.as_deref(), ctx.limits.max_value_length).or_else(|| {
            if self.invalid_value(ctx) {
                Some(FieldError::Invalid)
            } else {
                None
            }
        })
    }

    pub fn valid_icon(&self, ctx: &ValidationContext) -> bool {
        self.icon_error(ctx).is_none()
    }

    pub fn valid_name(&self, ctx: &ValidationContext) -> bool {
        self.name_error(ctx).is_none()
    }

    pub fn valid_value(&self, ctx: &ValidationContext) -> bool {
        self.value_error(ctx).is_none()
    }

    pub fn valid(&self, ctx: &ValidationContext) -> bool {
        self.valid_icon(ctx) && self.valid_name(ctx) && self.valid_value(ctx)
    }

    pub fn invalid_icon_message(&self, ctx: &ValidationContext) -> Option<String> {
        self.icon.as_ref()?;
        self.icon_error(ctx)
            .map(|e| e.message(Field::Icon, ctx.translator.as_ref()))
    }

    pub fn invalid_name_message(&self, ctx: &ValidationContext) -> Option<String> {
        self.name.as_ref()?;
        self.name_error(ctx)
            .map(|e| e.message(Field::Name, ctx.translator.as_ref()))
    }

    pub fn invalid_value_message(&self, ctx: &ValidationContext) -> Option<String> {
        self.value.as_ref()?;
        self.value_error(ctx)
            .map(|e| e.message(Field::Value, ctx.translator.as_ref()))
    }

    pub fn icon_css_class(&self, ctx: &ValidationContext) -> &'static str {
        css_class(self.icon.is_some(), self.valid_icon(ctx))
    }

    pub fn name_css_class(&self, ctx: &ValidationContext) -> &'static str {
        css_class(self.name.is_some(), self.valid_name(ctx))
    }

    pub fn value_css_class(&self, ctx: &ValidationContext) -> &'static str {
        css_class(self.value.is_some(), self.valid_value(ctx))
    }

    // An empty path (bare origin) is not reported as malformed.
    fn invalid_value(&self, ctx: &ValidationContext) -> bool {
        match self.path(ctx) {
            None | Some("") => false,
            Some(path) => {
                if self.external(ctx) {
                    !self.value.as_deref().is_some_and(valid_external)
                } else {
                    !valid_internal(path, ctx)
                }
            }
        }
    }
}

/// Absolute URL check. Any scheme the URL parser accepts is fine.
pub fn valid_external(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Known route or full-reload path.
pub fn valid_internal(path: &str, ctx: &ValidationContext) -> bool {
    ctx.resolver.resolve(path).is_known() || is_full_reload_path(path)
}

//! Custom sidebar section being edited

use tracing::debug;

use super::field::{Field, FieldError, check_text, css_class};
use super::{SectionLink, Segment, ValidationContext};
use crate::errors::{Result, SidebarError};

/// What [`Section::delete_link`] did with the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Persisted entry flagged, kept in its list for the update payload
    Marked,
    /// Unsaved entry dropped from its list
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub is_public: bool,
    /// Set for system-managed sections, which cannot be deleted
    pub section_type: Option<String>,
    pub primary_links: Vec<SectionLink>,
    pub secondary_links: Vec<SectionLink>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Not yet saved.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Valid title, at least one live link, and every live link valid.
    pub fn valid(&self, ctx: &ValidationContext) -> bool {
        let mut live = self.active_links().chain(self.active_secondary_links()).peekable();
        let has_links = live.peek().is_some();
        self.valid_title(ctx) && has_links && live.all(|link| link.valid(ctx))
    }

    pub fn title_error(&self, ctx: &ValidationContext) -> Option<FieldError> {
        check_text(self.title.as_deref(), ctx.limits.max_title_length)
    }

    pub fn valid_title(&self, ctx: &ValidationContext) -> bool {
        self.title_error(ctx).is_none()
    }

    pub fn invalid_title_message(&self, ctx: &ValidationContext) -> Option<String> {
        self.title.as_ref()?;
        self.title_error(ctx)
            .map(|e| e.message(Field::Title, ctx.translator.as_ref()))
    }

    pub fn title_css_class(&self, ctx: &ValidationContext) -> &'static str {
        css_class(self.title.is_some(), self.valid_title(ctx))
    }

    /// Primary links not marked for deletion.
    pub fn active_links(&self) -> impl Iterator<Item = &SectionLink> {
        self.primary_links.iter().filter(|l| !l.marked_for_deletion)
    }

    /// Secondary links not marked for deletion.
    pub fn active_secondary_links(&self) -> impl Iterator<Item = &SectionLink> {
        self.secondary_links.iter().filter(|l| !l.marked_for_deletion)
    }

    /// Primary then secondary, including soft-deleted entries.
    pub fn all_links(&self) -> impl Iterator<Item = &SectionLink> {
        self.primary_links.iter().chain(self.secondary_links.iter())
    }

    pub fn links(&self, segment: Segment) -> &[SectionLink] {
        match segment {
            Segment::Primary => &self.primary_links,
            Segment::Secondary => &self.secondary_links,
        }
    }

    pub(crate) fn links_mut(&mut self, segment: Segment) -> &mut Vec<SectionLink> {
        match segment {
            Segment::Primary => &mut self.primary_links,
            Segment::Secondary => &mut self.secondary_links,
        }
    }

    pub fn find_link(&self, object_id: u64) -> Option<&SectionLink> {
        self.all_links().find(|l| l.object_id == object_id)
    }

    /// Position of an entry inside the list its segment tag names.
    pub(crate) fn position(&self, object_id: u64) -> Option<(Segment, usize)> {
        let segment = self.find_link(object_id)?.segment;
        self.links(segment)
            .iter()
            .position(|l| l.object_id == object_id)
            .map(|idx| (segment, idx))
    }

    /// Append `link` to the list named by its segment.
    pub fn push_link(&mut self, link: SectionLink) {
        self.links_mut(link.segment).push(link);
    }

    /// Soft-delete persisted entries, drop unsaved ones.
    pub fn delete_link(&mut self, object_id: u64) -> Result<DeleteOutcome> {
        let (segment, idx) = self
            .position(object_id)
            .ok_or_else(|| SidebarError::not_found(format!("link #{}", object_id)))?;

        let list = self.links_mut(segment);
        if list[idx].id.is_some() {
            list[idx].marked_for_deletion = true;
            debug!("Link #{} marked for deletion", object_id);
            Ok(DeleteOutcome::Marked)
        } else {
            list.remove(idx);
            debug!("Unsaved link #{} removed from {}", object_id, segment);
            Ok(DeleteOutcome::Removed)
        }
    }
}

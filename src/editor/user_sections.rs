//! The current user's sidebar sections, kept in sync after each submission

use crate::models::SidebarSectionData;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSections {
    sections: Vec<SidebarSectionData>,
}

impl UserSections {
    pub fn new(sections: Vec<SidebarSectionData>) -> Self {
        Self { sections }
    }

    pub fn as_slice(&self) -> &[SidebarSectionData] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&SidebarSectionData> {
        self.sections.iter().find(|s| s.id == Some(id))
    }

    /// Append a newly created section.
    pub fn push(&mut self, section: SidebarSectionData) {
        self.sections.push(section);
    }

    /// Replace the section with the same id. Returns false when none matched.
    pub fn replace(&mut self, section: SidebarSectionData) -> bool {
        match self.sections.iter_mut().find(|s| s.id.is_some() && s.id == section.id) {
            Some(slot) => {
                *slot = section;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != Some(id));
        self.sections.len() != before
    }

    /// Swap the first section (the reset-able system section) for `section`.
    pub fn replace_first(&mut self, section: SidebarSectionData) {
        if !self.sections.is_empty() {
            self.sections.remove(0);
        }
        self.sections.insert(0, section);
    }
}

//! Custom section editor session
//!
//! One [`SectionEditor`] backs one open form. It owns the [`Section`] being
//! edited and the object-id counter, and talks to the server only when the
//! user saves, deletes or resets the section.

mod flash;
mod user_sections;

pub use flash::{Flash, extract_error, sanitize};
pub use user_sections::UserSections;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::{ConfirmDialog, HttpMethod, Transport, TransportError};
use crate::errors::{Result, SidebarError};
use crate::i18n::keys;
use crate::models::{
    CreateLinkPayload, CreateSectionPayload, SectionEnvelope, SidebarSectionData, SidebarUrlData,
    UpdateLinkPayload, UpdateSectionPayload,
};
use crate::section::{DeleteOutcome, Section, SectionLink, Segment, ValidationContext};

const SECTIONS_PATH: &str = "/sidebar_sections";

/// Result of a submission that reached a decision.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Created, updated or reset; carries the server's copy
    Saved(SidebarSectionData),
    Deleted,
    /// The confirmation dialog was declined; nothing was sent
    Cancelled,
}

pub struct SectionEditor {
    ctx: ValidationContext,
    model: Option<Section>,
    next_object_id: u64,
    flash: Option<Flash>,
}

impl SectionEditor {
    pub fn new(ctx: ValidationContext) -> Self {
        Self {
            ctx,
            model: None,
            next_object_id: 0,
            flash: None,
        }
    }

    /// Start a session, editing `persisted` or a new empty section.
    pub fn open(&mut self, persisted: Option<&SidebarSectionData>) {
        self.flash = None;
        self.next_object_id = 0;
        self.model = Some(match persisted {
            Some(data) => self.section_from(data),
            None => Section {
                primary_links: vec![SectionLink::new(self.next_object_id, Segment::Primary)],
                ..Section::new()
            },
        });
        debug!(
            "Section editor opened ({})",
            persisted
                .and_then(|d| d.id)
                .map_or_else(|| "new".to_string(), |id| format!("id {}", id))
        );
    }

    pub fn close(&mut self) {
        self.model = None;
    }

    pub fn is_open(&self) -> bool {
        self.model.is_some()
    }

    pub fn context(&self) -> &ValidationContext {
        &self.ctx
    }

    pub fn model(&self) -> Option<&Section> {
        self.model.as_ref()
    }

    /// Direct field access for the form (title, visibility, link fields).
    pub fn model_mut(&mut self) -> Option<&mut Section> {
        self.model.as_mut()
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    /// Translation key of the form title.
    pub fn header(&self) -> &'static str {
        match self.model.as_ref().and_then(|m| m.id) {
            Some(_) => keys::HEADER_EDIT,
            None => keys::HEADER_ADD,
        }
    }

    pub fn header_text(&self) -> String {
        self.ctx.translator.translate(self.header(), &[])
    }

    /// Saved sections can be deleted unless they are system managed.
    pub fn can_delete(&self) -> bool {
        self.model
            .as_ref()
            .is_some_and(|m| m.id.is_some() && m.section_type.is_none())
    }

    pub fn valid(&self) -> bool {
        self.model.as_ref().is_some_and(|m| m.valid(&self.ctx))
    }

    /// Append a blank link to `segment`, returning its object id.
    pub fn add_link(&mut self, segment: Segment) -> Result<u64> {
        let object_id = self.next_object_id + 1;
        self.section_mut()?.push_link(SectionLink::new(object_id, segment));
        self.next_object_id = object_id;
        Ok(object_id)
    }

    pub fn add_secondary_link(&mut self) -> Result<u64> {
        self.add_link(Segment::Secondary)
    }

    pub fn delete_link(&mut self, object_id: u64) -> Result<DeleteOutcome> {
        self.section_mut()?.delete_link(object_id)
    }

    pub fn reorder(&mut self, from: u64, to: u64, above: bool) -> Result<()> {
        self.section_mut()?.reorder(from, to, above)
    }

    /// Body for `POST /sidebar_sections`.
    pub fn create_payload(&self) -> Result<CreateSectionPayload> {
        let section = self.section()?;
        Ok(CreateSectionPayload {
            title: section.title.clone(),
            public: section.is_public,
            links: section
                .all_links()
                .filter(|l| !l.marked_for_deletion)
                .map(|l| CreateLinkPayload {
                    icon: l.icon.clone(),
                    name: l.name.clone(),
                    value: l.path(&self.ctx).map(String::from),
                    segment: l.segment,
                })
                .collect(),
        })
    }

    /// Body for `PUT /sidebar_sections/{id}`, both segments, soft deletes included.
    pub fn update_payload(&self) -> Result<UpdateSectionPayload> {
        let section = self.section()?;
        Ok(UpdateSectionPayload {
            title: section.title.clone(),
            public: section.is_public,
            links: section
                .all_links()
                .map(|l| UpdateLinkPayload {
                    id: l.id,
                    icon: l.icon.clone(),
                    name: l.name.clone(),
                    value: l.path(&self.ctx).map(String::from),
                    segment: l.segment,
                    destroy: l.marked_for_deletion.then(|| "1".to_string()),
                })
                .collect(),
        })
    }

    /// Current state as persisted data, soft-deleted entries left out.
    pub fn snapshot(&self) -> Option<SidebarSectionData> {
        let section = self.model.as_ref()?;
        Some(SidebarSectionData {
            id: section.id,
            title: section.title.clone(),
            public: section.is_public,
            section_type: section.section_type.clone(),
            links: section
                .all_links()
                .filter(|l| !l.marked_for_deletion)
                .map(|l| SidebarUrlData {
                    id: l.id,
                    icon: l.icon.clone(),
                    name: l.name.clone(),
                    value: l.value.clone(),
                    segment: l.segment,
                })
                .collect(),
        })
    }

    /// Update when the section is saved already, create otherwise.
    ///
    /// An invalid section is rejected without a request. On failure the model
    /// is kept and the flash slot holds the message.
    pub async fn save(
        &mut self,
        transport: &dyn Transport,
        sections: &mut UserSections,
    ) -> Result<SubmitOutcome> {
        let section = self.section()?;
        if !section.valid(&self.ctx) {
            return Err(SidebarError::validation("Section has invalid fields"));
        }

        let id = section.id;
        match id {
            Some(id) => self.update(id, transport, sections).await,
            None => self.create(transport, sections).await,
        }
    }

    async fn create(
        &mut self,
        transport: &dyn Transport,
        sections: &mut UserSections,
    ) -> Result<SubmitOutcome> {
        let body = serde_json::to_value(self.create_payload()?)?;
        let response = self.submit(transport, HttpMethod::Post, SECTIONS_PATH, Some(body)).await?;
        let created = self.parse_section(response)?;

        info!("Created sidebar section {:?}", created.id);
        sections.push(created.clone());
        self.close();
        Ok(SubmitOutcome::Saved(created))
    }

    async fn update(
        &mut self,
        id: i64,
        transport: &dyn Transport,
        sections: &mut UserSections,
    ) -> Result<SubmitOutcome> {
        let body = serde_json::to_value(self.update_payload()?)?;
        let path = format!("{}/{}", SECTIONS_PATH, id);
        let response = self.submit(transport, HttpMethod::Put, &path, Some(body)).await?;
        let updated = self.parse_section(response)?;

        info!("Updated sidebar section {}", id);
        if !sections.replace(updated.clone()) {
            debug!("Section {} was not in the user's list", id);
        }
        self.close();
        Ok(SubmitOutcome::Saved(updated))
    }

    /// Delete the saved section after confirmation.
    pub async fn delete(
        &mut self,
        dialog: &dyn ConfirmDialog,
        transport: &dyn Transport,
        sections: &mut UserSections,
    ) -> Result<SubmitOutcome> {
        let id = self.saved_id()?;
        let message = self.ctx.translator.translate(keys::DELETE_CONFIRM, &[]);
        if !dialog.yes_no_confirm(&message).await {
            return Ok(SubmitOutcome::Cancelled);
        }

        let path = format!("{}/{}", SECTIONS_PATH, id);
        self.submit(transport, HttpMethod::Delete, &path, None).await?;

        info!("Deleted sidebar section {}", id);
        sections.remove(id);
        self.close();
        Ok(SubmitOutcome::Deleted)
    }

    /// Restore a system section to its default links after confirmation.
    pub async fn reset_to_default(
        &mut self,
        dialog: &dyn ConfirmDialog,
        transport: &dyn Transport,
        sections: &mut UserSections,
    ) -> Result<SubmitOutcome> {
        let id = self.saved_id()?;
        let message = self.ctx.translator.translate(keys::RESET_CONFIRM, &[]);
        if !dialog.yes_no_confirm(&message).await {
            return Ok(SubmitOutcome::Cancelled);
        }

        let path = format!("{}/reset/{}", SECTIONS_PATH, id);
        let response = self.submit(transport, HttpMethod::Put, &path, None).await?;
        let reset = self.parse_section(response)?;

        info!("Reset sidebar section {} to default", id);
        sections.replace_first(reset.clone());
        self.close();
        Ok(SubmitOutcome::Saved(reset))
    }

    fn section(&self) -> Result<&Section> {
        self.model
            .as_ref()
            .ok_or_else(|| SidebarError::not_found("No section is open"))
    }

    fn section_mut(&mut self) -> Result<&mut Section> {
        self.model
            .as_mut()
            .ok_or_else(|| SidebarError::not_found("No section is open"))
    }

    fn saved_id(&self) -> Result<i64> {
        self.section()?
            .id
            .ok_or_else(|| SidebarError::validation("Section has not been saved yet"))
    }

    fn section_from(&mut self, data: &SidebarSectionData) -> Section {
        let mut section = Section {
            id: data.id,
            title: data.title.clone(),
            is_public: data.public,
            section_type: data.section_type.clone(),
            ..Section::new()
        };
        for segment in [Segment::Primary, Segment::Secondary] {
            for link in data.links.iter().filter(|l| l.segment == segment) {
                self.next_object_id += 1;
                section.push_link(SectionLink::from_persisted(link, self.next_object_id));
            }
        }
        section
    }

    async fn submit(
        &mut self,
        transport: &dyn Transport,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value> {
        debug!("Submitting {} {}", method, path);
        transport.submit(method, path, body).await.map_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
            self.fail(&e)
        })
    }

    fn parse_section(&mut self, response: Value) -> Result<SidebarSectionData> {
        serde_json::from_value::<SectionEnvelope>(response)
            .map(|env| env.sidebar_section)
            .map_err(|e| {
                warn!("Unexpected sidebar section response: {}", e);
                self.fail(&TransportError {
                    status: Some(200),
                    body: None,
                    message: e.to_string(),
                })
            })
    }

    fn fail(&mut self, err: &TransportError) -> SidebarError {
        let flash = Flash::from_transport(err, self.ctx.translator.as_ref());
        let error = SidebarError::transport(flash.text.clone());
        self.flash = Some(flash);
        error
    }
}

//! Wire types exchanged with the `/sidebar_sections` endpoints

use serde::{Deserialize, Serialize};

use crate::section::Segment;

/// A persisted sidebar section as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SidebarSectionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub section_type: Option<String>,
    #[serde(default)]
    pub links: Vec<SidebarUrlData>,
}

/// A persisted sidebar link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SidebarUrlData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub segment: Segment,
}

/// `{ "sidebar_section": ... }` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionEnvelope {
    pub sidebar_section: SidebarSectionData,
}

/// Body of `POST /sidebar_sections`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateSectionPayload {
    pub title: Option<String>,
    pub public: bool,
    pub links: Vec<CreateLinkPayload>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateLinkPayload {
    pub icon: Option<String>,
    pub name: Option<String>,
    /// Origin-stripped path
    pub value: Option<String>,
    pub segment: Segment,
}

/// Body of `PUT /sidebar_sections/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateSectionPayload {
    pub title: Option<String>,
    pub public: bool,
    pub links: Vec<UpdateLinkPayload>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateLinkPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub icon: Option<String>,
    pub name: Option<String>,
    /// Origin-stripped path
    pub value: Option<String>,
    pub segment: Segment,
    /// `"1"` when the link should be destroyed server side
    #[serde(rename = "_destroy", skip_serializing_if = "Option::is_none")]
    pub destroy: Option<String>,
}

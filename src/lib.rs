//! sidebar-sections - custom sidebar section editor
//!
//! Validates, reorders and submits user-defined sidebar sections: a titled
//! group of links split into a primary and a secondary list.
//!
//! # Features
//! - **cli**: Command-line tool (default)
//!
//! # Architecture
//! - `section`: Section and link model, field validation, reordering
//! - `editor`: One open form session and its submissions
//! - `client`: Transport and confirmation dialog seams, HTTP implementation
//! - `routing`: Internal route resolution for link values
//! - `i18n`: Message catalog
//! - `config`: Configuration management
//! - `system`: Logging

pub mod cli;
pub mod client;
pub mod config;
pub mod editor;
pub mod errors;
pub mod i18n;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod models;
pub mod routing;
pub mod section;
pub mod system;

use std::sync::Arc;

use super::Origin;
use crate::config::{LimitsConfig, StaticConfig};
use crate::errors::Result;
use crate::i18n::{EnglishCatalog, Translator};
use crate::routing::{RouteResolver, RouteTable};

/// Everything link and title validation reads besides the field values.
#[derive(Clone)]
pub struct ValidationContext {
    pub resolver: Arc<dyn RouteResolver>,
    pub translator: Arc<dyn Translator>,
    pub origin: Origin,
    pub limits: LimitsConfig,
}

impl ValidationContext {
    pub fn new(
        resolver: Arc<dyn RouteResolver>,
        translator: Arc<dyn Translator>,
        origin: Origin,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            resolver,
            translator,
            origin,
            limits,
        }
    }

    /// Route table, English strings, site host and limits from configuration.
    pub fn from_config(config: &StaticConfig) -> Result<Self> {
        let table = RouteTable::from_config(&config.routes)?;
        Ok(Self::new(
            Arc::new(table),
            Arc::new(EnglishCatalog),
            Origin::new(&config.site.host),
            config.limits.clone(),
        ))
    }
}

impl std::fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationContext")
            .field("origin", &self.origin)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::Config;

/// Shared application state, cloneable across handlers via Arc-wrapped
/// fields.
///
/// Holds the immutable configuration and the Tera template engine.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tera: Arc<Tera>,
}

impl AppState {
    /// Creates a new application state from the given configuration and
    /// templates.
    pub fn new(config: Config, tera: Tera) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
        }
    }
}

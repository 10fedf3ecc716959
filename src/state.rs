//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::store::XmlStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<XmlStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: XmlStore, config: EnvironmentConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

use std::sync::Arc;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

// AppState is shared by every handler; the catalog service owns the one registry.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let catalog = factory::create_catalog_service(&config);
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

// decode_json turns a request body into a command request; bad bodies answer 400.
pub fn decode_json<T: DeserializeOwned>(val: Value) -> Result<T, ServerError> {
    serde_json::from_value(val).map_err(|err| ServerError::from(CommandError::from(LibraryError::from(err))))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

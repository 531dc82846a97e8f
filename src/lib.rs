pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use crate::services::import_service::ImportService;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState<S: DocumentStore> {
    pub store: S,
    pub import_service: ImportService<S>,
}

impl<S: DocumentStore> AppState<S> {
    pub fn new(store: S, batch_op_limit: usize) -> Self {
        let import_service = ImportService::new(store.clone(), batch_op_limit);

        Self {
            store,
            import_service,
        }
    }
}

//! Controller de tablas de referencia

use std::sync::Arc;

use crate::models::lookup::LookupRecord;
use crate::repositories::lookup_repository::LookupRepository;
use crate::store::XmlStore;

pub struct LookupController {
    repository: LookupRepository,
}

impl LookupController {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self {
            repository: LookupRepository::new(store),
        }
    }

    pub async fn property_types(&self) -> Vec<LookupRecord> {
        self.repository.property_types().await
    }

    pub async fn listing_types(&self) -> Vec<LookupRecord> {
        self.repository.listing_types().await
    }

    pub async fn property_sub_types(&self) -> Vec<LookupRecord> {
        self.repository.property_sub_types().await
    }
}

//! Controller de contadores de acciones de UI

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dto::common::ApiResponse;
use crate::dto::feedback_dto::{HitSummary, RecordHitRequest};
use crate::models::url_hit::{UrlHitRecord, ALLOWED_HIT_KEYS};
use crate::repositories::url_hit_repository::UrlHitRepository;
use crate::store::XmlStore;
use crate::utils::errors::{AppError, AppResult};

pub struct UrlHitController {
    repository: UrlHitRepository,
}

impl UrlHitController {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self {
            repository: UrlHitRepository::new(store),
        }
    }

    pub async fn record(&self, request: RecordHitRequest) -> AppResult<ApiResponse<UrlHitRecord>> {
        if !ALLOWED_HIT_KEYS.contains(&request.key.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Clave de acción desconocida: \"{}\"",
                request.key
            )));
        }

        let row = self.repository.increment(request.key, request.url).await?;
        Ok(ApiResponse::success(row))
    }

    /// Totales por clave, sumando todas las filas que comparten la Key
    pub async fn summary(&self) -> Vec<HitSummary> {
        let mut totals: BTreeMap<String, u64> = BTreeMap::new();
        for row in self.repository.all().await {
            let count = row.count_value();
            *totals.entry(row.key).or_insert(0) += count;
        }
        totals
            .into_iter()
            .map(|(key, total)| HitSummary { key, total })
            .collect()
    }
}

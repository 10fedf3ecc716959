//! Controller de feedback

use std::sync::Arc;

use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::feedback_dto::CreateFeedbackRequest;
use crate::models::feedback::FeedbackRecord;
use crate::repositories::feedback_repository::FeedbackRepository;
use crate::store::XmlStore;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{now_iso, validate_rating};

pub struct FeedbackController {
    repository: FeedbackRepository,
}

impl FeedbackController {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self {
            repository: FeedbackRepository::new(store),
        }
    }

    pub async fn create(
        &self,
        request: CreateFeedbackRequest,
    ) -> AppResult<ApiResponse<FeedbackRecord>> {
        let rating = validate_rating(&request.rating)?;

        let record = FeedbackRecord {
            feedback_id: Uuid::new_v4().to_string(),
            rating: rating.to_string(),
            message: request.message,
            name: request.name,
            phone: request.phone,
            user_id: request.user_id,
            full_name: request.full_name,
            email: request.email,
            created_date: now_iso(),
            is_resolved: "false".to_string(),
        };

        let saved = self.repository.insert(record).await?;
        Ok(ApiResponse::success_with_message(
            saved,
            "Feedback recibido, gracias".to_string(),
        ))
    }

    pub async fn list(&self) -> Vec<FeedbackRecord> {
        self.repository.all().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<FeedbackRecord> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Feedback", id))
    }
}

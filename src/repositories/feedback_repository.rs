//! Repositorio de feedback: append-only

use std::sync::Arc;

use crate::models::feedback::{FeedbackRecord, FeedbacksDoc};
use crate::store::XmlStore;
use crate::utils::errors::AppResult;

pub struct FeedbackRepository {
    store: Arc<XmlStore>,
}

impl FeedbackRepository {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<FeedbackRecord> {
        self.store.load::<FeedbacksDoc>().await.feedbacks
    }

    pub async fn find_by_id(&self, id: &str) -> Option<FeedbackRecord> {
        let doc = self.store.load::<FeedbacksDoc>().await;
        doc.feedbacks
            .into_iter()
            .find(|f| f.feedback_id.trim() == id.trim())
    }

    pub async fn insert(&self, record: FeedbackRecord) -> AppResult<FeedbackRecord> {
        self.store
            .update::<FeedbacksDoc, _, _>(move |doc| {
                let saved = record.clone();
                doc.feedbacks.push(record);
                Ok(saved)
            })
            .await
    }
}

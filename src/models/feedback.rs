//! Modelo de Feedback (append-only: no existe update ni delete)

use serde::{Deserialize, Serialize};

use crate::store::Document;

/// Documento persistido de feedback (Feedbacks/Feedback)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FeedbacksDoc {
    #[serde(rename = "Feedback", default)]
    pub feedbacks: Vec<FeedbackRecord>,
}

impl Document for FeedbacksDoc {
    const ROOT: &'static str = "Feedbacks";
    const FILE: &'static str = "feedbacks.xml";
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct FeedbackRecord {
    #[serde(rename = "FeedbackID")]
    pub feedback_id: String,
    pub rating: String,
    pub message: String,
    pub name: String,
    pub phone: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub created_date: String,
    pub is_resolved: String,
}

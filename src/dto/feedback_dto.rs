use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub rating: String,
    pub message: String,
    pub name: String,
    pub phone: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordHitRequest {
    pub key: String,
    pub url: String,
}

// Total agregado por clave en la lectura de contadores
#[derive(Debug, Serialize)]
pub struct HitSummary {
    pub key: String,
    pub total: u64,
}

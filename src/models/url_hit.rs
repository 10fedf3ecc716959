//! Modelo de contadores de acciones de UI (UrlHit)

use serde::{Deserialize, Serialize};

use crate::store::Document;

/// Acciones de UI que se permiten contar. Cualquier otra clave se rechaza.
pub const ALLOWED_HIT_KEYS: &[&str] = &[
    "listing_view",
    "map_view",
    "call_click",
    "whatsapp_click",
    "email_click",
    "share_click",
];

/// Documento persistido de contadores (UrlHitCounts/UrlHit)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UrlHitCountsDoc {
    #[serde(rename = "UrlHit", default)]
    pub hits: Vec<UrlHitRecord>,
}

impl Document for UrlHitCountsDoc {
    const ROOT: &'static str = "UrlHitCounts";
    const FILE: &'static str = "url_hits.xml";
}

/// Un contador. Si Url no está vacío, la fila se identifica por Url (varias
/// URLs pueden compartir la misma Key y contarse por separado); si está
/// vacío, la fila se identifica por Key.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct UrlHitRecord {
    pub key: String,
    pub url: String,
    pub count: String,
    pub updated_date: String,
}

impl UrlHitRecord {
    pub fn count_value(&self) -> u64 {
        self.count.trim().parse().unwrap_or(0)
    }
}

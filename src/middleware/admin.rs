//! Guardia de endpoints administrativos
//!
//! Algunas lecturas (lista de usuarios, feedback, contadores) están
//! restringidas a un llamador distinguido. El llamador se identifica con el
//! header `x-api-key`, comparado contra la clave configurada por entorno.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::state::AppState;
use crate::utils::errors::AppError;

const ADMIN_KEY_HEADER: &str = "x-api-key";

/// Extractor que rechaza con 403 toda request sin la clave de administrador
pub struct AdminGuard;

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        match provided {
            Some(key) if !state.config.admin_api_key.is_empty()
                && key == state.config.admin_api_key =>
            {
                Ok(AdminGuard)
            }
            _ => Err(AppError::Forbidden(
                "Este recurso requiere la clave de administrador".to_string(),
            )),
        }
    }
}

//! Controller de usuarios
//!
//! Las contraseñas se almacenan con hash bcrypt; no existe ningún valor
//! centinela que permita el login sin la contraseña real.

use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::user_dto::{
    ChangePasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
    UpdateProfileRequest, UserResponse,
};
use crate::models::user::UserRecord;
use crate::repositories::listing_repository::ListingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::store::XmlStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{normalize_phone, now_iso};

const MIN_PASSWORD_LEN: usize = 6;

pub struct UserController {
    repository: UserRepository,
    listings: ListingRepository,
}

impl UserController {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self {
            repository: UserRepository::new(store.clone()),
            listings: ListingRepository::new(store),
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> AppResult<ApiResponse<UserResponse>> {
        request.validate()?;

        let password_hash = hash(&request.login_password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let record = UserRecord::new(
            request.user_id,
            request.full_name,
            request.email,
            request.mobile_no,
            password_hash,
        );

        let saved = self.repository.insert_unique(record).await?;
        tracing::info!("Nuevo usuario registrado: {}", saved.user_id);
        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<ApiResponse<UserResponse>> {
        if request.user_id.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::BadRequest("Missing credentials".to_string()));
        }

        let user = self
            .repository
            .find_by_user_id(&request.user_id)
            .await
            .ok_or_else(|| {
                AppError::NotFound("Invalid credentials. User not found.".to_string())
            })?;

        let valid = verify(&request.password, &user.login_password)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized("Invalid password.".to_string()));
        }

        // El backend original calculaba LastLogin pero nunca lo guardaba;
        // aquí sí se persiste.
        let user = self
            .repository
            .modify(&user.user_id, |u| {
                u.last_login = now_iso();
                Ok(())
            })
            .await?;

        tracing::info!("Login exitoso: {}", user.user_id);
        Ok(ApiResponse::success(user.into()))
    }

    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> AppResult<ApiResponse<UserResponse>> {
        if request.user_id.trim().is_empty() || request.mobile_no.trim().is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }
        validate_password(&request.new_password)?;

        // La comparación del teléfono es solo por dígitos: "+65 9123-4567"
        // debe coincidir con "91234567" almacenado.
        let user = self
            .repository
            .find_by_user_id(&request.user_id)
            .await
            .filter(|u| {
                let stored = normalize_phone(&u.mobile_no);
                !stored.is_empty() && stored_matches(&stored, &normalize_phone(&request.mobile_no))
            })
            .ok_or_else(|| {
                AppError::NotFound("No account matches that user and phone number".to_string())
            })?;

        let password_hash = hash(&request.new_password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;
        let updated = self
            .repository
            .modify(&user.user_id, move |u| {
                u.login_password = password_hash;
                Ok(())
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Contraseña restablecida exitosamente".to_string(),
        ))
    }

    pub async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> AppResult<ApiResponse<UserResponse>> {
        if request.user_id.trim().is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }
        validate_password(&request.new_password)?;

        let password_hash = hash(&request.new_password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;
        let updated = self
            .repository
            .modify(&request.user_id, move |u| {
                u.login_password = password_hash;
                Ok(())
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Contraseña actualizada exitosamente".to_string(),
        ))
    }

    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserResponse> {
        if user_id.trim().is_empty() {
            return Err(AppError::BadRequest("userID is required".to_string()));
        }
        self.repository
            .find_by_user_id(user_id)
            .await
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", user_id)))
    }

    /// Actualizar el perfil. Si cambia el UserID, todos los anuncios del
    /// usuario se reasignan al nuevo identificador.
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<ApiResponse<UserResponse>> {
        if request.user_id.trim().is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        let current = self
            .repository
            .find_by_user_id(user_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", user_id)))?;
        let old_user_id = current.user_id.clone();

        let updated = self
            .repository
            .update_profile(
                user_id,
                request.user_id,
                request.full_name,
                request.email,
                request.mobile_no,
            )
            .await?;

        if updated.user_id != old_user_id {
            let moved = self
                .listings
                .reassign_owner(&old_user_id, &updated.user_id)
                .await?;
            tracing::info!(
                "UserID cambiado de '{}' a '{}': {} anuncios reasignados",
                old_user_id,
                updated.user_id,
                moved
            );
        }

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Perfil actualizado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Vec<UserResponse> {
        self.repository
            .all()
            .await
            .into_iter()
            .map(UserResponse::from)
            .collect()
    }
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::ValidationError(format!(
            "La contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

fn stored_matches(stored_digits: &str, supplied_digits: &str) -> bool {
    if supplied_digits.is_empty() {
        return false;
    }
    // El cliente puede incluir el prefijo de país que el registro no tiene
    stored_digits == supplied_digits || supplied_digits.ends_with(stored_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_match_tolerates_country_prefix() {
        assert!(stored_matches("91234567", "91234567"));
        assert!(stored_matches("91234567", "6591234567"));
        assert!(!stored_matches("91234567", "91234568"));
        assert!(!stored_matches("91234567", ""));
    }
}

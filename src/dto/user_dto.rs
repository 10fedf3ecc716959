use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserRecord;

// Request de registro. Las claves camelCase son las que envían los
// clientes web y móvil.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(rename = "userID")]
    #[validate(length(min = 1, message = "userID es requerido"))]
    pub user_id: String,
    pub full_name: String,
    #[validate(length(min = 1, message = "email es requerido"))]
    pub email: String,
    pub mobile_no: String,
    #[validate(length(min = 6, message = "la contraseña debe tener al menos 6 caracteres"))]
    pub login_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub password: String,
}

// Reset de contraseña verificando el teléfono registrado
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub mobile_no: String,
    #[serde(default)]
    pub new_password: String,
}

// Cambio de contraseña solo por userID
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(rename = "userID", default)]
    pub user_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_no: String,
}

// Response de usuario (sin hash de contraseña)
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub mobile_no: String,
    pub last_login: String,
    pub is_active: String,
    pub created_date: String,
    pub updated_date: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            user_id: user.user_id,
            full_name: user.full_name,
            email: user.email,
            mobile_no: user.mobile_no,
            last_login: user.last_login,
            is_active: user.is_active,
            created_date: user.created_date,
            updated_date: user.updated_date,
        }
    }
}

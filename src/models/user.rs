//! Modelo de User
//!
//! La contraseña se persiste como hash bcrypt en el campo LoginPassword
//! (el nombre del campo se conserva por compatibilidad con los documentos
//! existentes).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;
use crate::utils::validation::now_iso;

/// Documento persistido de usuarios (Users/User)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UsersDoc {
    #[serde(rename = "User", default)]
    pub users: Vec<UserRecord>,
}

impl Document for UsersDoc {
    const ROOT: &'static str = "Users";
    const FILE: &'static str = "user_data.xml";
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "UserID")]
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub mobile_no: String,
    pub login_password: String,
    pub remark: String,
    pub last_login: String,
    pub is_active: String,
    pub is_deleted: String,
    pub created_date: String,
    pub updated_date: String,
}

impl UserRecord {
    /// Registro nuevo con flags y timestamps de alta
    pub fn new(
        user_id: String,
        full_name: String,
        email: String,
        mobile_no: String,
        password_hash: String,
    ) -> Self {
        let now = now_iso();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            full_name,
            email,
            mobile_no,
            login_password: password_hash,
            remark: "User Registered via API".to_string(),
            last_login: now.clone(),
            is_active: "true".to_string(),
            is_deleted: "false".to_string(),
            created_date: now.clone(),
            updated_date: now,
        }
    }
}

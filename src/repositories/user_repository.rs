//! Repositorio de usuarios
//!
//! Las comparaciones de UserID y Email son case-insensitive. Los chequeos
//! de duplicados se hacen dentro del ciclo de escritura, bajo el lock del
//! documento, para que dos registros simultáneos no pasen ambos el chequeo.

use std::sync::Arc;

use crate::models::user::{UserRecord, UsersDoc};
use crate::store::XmlStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::now_iso;

pub struct UserRepository {
    store: Arc<XmlStore>,
}

impl UserRepository {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<UserRecord> {
        self.store.load::<UsersDoc>().await.users
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Option<UserRecord> {
        let doc = self.store.load::<UsersDoc>().await;
        doc.users
            .into_iter()
            .find(|u| u.user_id.eq_ignore_ascii_case(user_id))
    }

    /// Alta con chequeo de unicidad de UserID y de Email no vacío.
    /// El conflicto indica qué campo colisionó.
    pub async fn insert_unique(&self, record: UserRecord) -> AppResult<UserRecord> {
        self.store
            .update::<UsersDoc, _, _>(move |doc| {
                if doc
                    .users
                    .iter()
                    .any(|u| u.user_id.eq_ignore_ascii_case(&record.user_id))
                {
                    return Err(AppError::Conflict(format!(
                        "UserID \"{}\" is already taken.",
                        record.user_id
                    )));
                }
                if !record.email.is_empty()
                    && doc
                        .users
                        .iter()
                        .any(|u| !u.email.is_empty() && u.email.eq_ignore_ascii_case(&record.email))
                {
                    return Err(AppError::Conflict(format!(
                        "Email \"{}\" is already registered.",
                        record.email
                    )));
                }

                let saved = record.clone();
                doc.users.push(record);
                Ok(saved)
            })
            .await
    }

    /// Mutar el usuario identificado por `user_id` (case-insensitive).
    /// Actualiza UpdatedDate y devuelve el registro resultante.
    pub async fn modify<F>(&self, user_id: &str, mutate: F) -> AppResult<UserRecord>
    where
        F: FnOnce(&mut UserRecord) -> AppResult<()> + Send + 'static,
    {
        let user_id = user_id.to_string();
        self.store
            .update::<UsersDoc, _, _>(move |doc| {
                let existing = doc
                    .users
                    .iter_mut()
                    .find(|u| u.user_id.eq_ignore_ascii_case(&user_id))
                    .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", user_id)))?;

                mutate(existing)?;
                existing.updated_date = now_iso();
                Ok(existing.clone())
            })
            .await
    }

    /// Cambio de perfil con posible cambio de UserID: valida que el nuevo
    /// UserID y el nuevo Email (si cambian) estén libres, bajo el mismo lock.
    pub async fn update_profile(
        &self,
        user_id: &str,
        new_user_id: String,
        full_name: String,
        email: String,
        mobile_no: String,
    ) -> AppResult<UserRecord> {
        let user_id = user_id.to_string();
        self.store
            .update::<UsersDoc, _, _>(move |doc| {
                let current_index = doc
                    .users
                    .iter()
                    .position(|u| u.user_id.eq_ignore_ascii_case(&user_id))
                    .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", user_id)))?;

                let user_id_changed = !new_user_id.eq_ignore_ascii_case(&user_id);
                if user_id_changed
                    && doc
                        .users
                        .iter()
                        .any(|u| u.user_id.eq_ignore_ascii_case(&new_user_id))
                {
                    return Err(AppError::Conflict(format!(
                        "UserID \"{}\" is already taken.",
                        new_user_id
                    )));
                }

                let email_changed =
                    !email.eq_ignore_ascii_case(&doc.users[current_index].email);
                if email_changed
                    && !email.is_empty()
                    && doc.users.iter().enumerate().any(|(i, u)| {
                        i != current_index
                            && !u.email.is_empty()
                            && u.email.eq_ignore_ascii_case(&email)
                    })
                {
                    return Err(AppError::Conflict(format!(
                        "Email \"{}\" is already registered.",
                        email
                    )));
                }

                let user = &mut doc.users[current_index];
                user.user_id = new_user_id;
                user.full_name = full_name;
                user.email = email;
                user.mobile_no = mobile_no;
                user.updated_date = now_iso();
                Ok(user.clone())
            })
            .await
    }
}

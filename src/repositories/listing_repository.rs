//! Repositorio de anuncios
//!
//! Operaciones a nivel de colección sobre PropertyListings. Las mutaciones
//! pasan por `XmlStore::update`, así que cada una releee el documento
//! completo bajo el lock del archivo y lo reescribe entero.
//!
//! Máquina de estados de un anuncio (IsDeleted × IsClosed):
//!
//! ```text
//! ACTIVE --close--> CLOSED --reopen--> ACTIVE
//! ACTIVE | CLOSED --soft-delete--> DELETED (terminal)
//! ```
//!
//! DELETED es terminal e indistinguible de inexistente: toda operación
//! sobre un id borrado reporta not-found.

use std::sync::Arc;

use crate::models::listing::{ListingRecord, PropertyListingsDoc};
use crate::store::XmlStore;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{flag_is_true, now_iso};

/// Filtro del listado
#[derive(Debug, Default, Clone)]
pub struct ListingFilter {
    pub exclude_deleted: bool,
    pub exclude_closed: bool,
    pub created_by: Option<String>,
}

impl ListingFilter {
    /// Vista pública por defecto: sin borrados ni cerrados
    pub fn browse() -> Self {
        Self {
            exclude_deleted: true,
            exclude_closed: true,
            created_by: None,
        }
    }

    /// Vista "mis anuncios": el propietario siempre ve sus cerrados
    pub fn owner(created_by: String) -> Self {
        Self {
            exclude_deleted: true,
            exclude_closed: false,
            created_by: Some(created_by),
        }
    }
}

pub struct ListingRepository {
    store: Arc<XmlStore>,
}

impl ListingRepository {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self, filter: ListingFilter) -> Vec<ListingRecord> {
        let doc = self.store.load::<PropertyListingsDoc>().await;

        // Filtrar por propietario nunca oculta los cerrados, diga lo que
        // diga el filtro recibido.
        let exclude_closed = filter.exclude_closed && filter.created_by.is_none();

        doc.listings
            .into_iter()
            .filter(|l| !(filter.exclude_deleted && flag_is_true(&l.is_deleted)))
            .filter(|l| !(exclude_closed && flag_is_true(&l.is_closed)))
            .filter(|l| match &filter.created_by {
                Some(owner) => l.created_by == *owner,
                None => true,
            })
            .collect()
    }

    /// Buscar por PropertyID entre los no borrados
    pub async fn find_by_id(&self, id: &str) -> Option<ListingRecord> {
        let doc = self.store.load::<PropertyListingsDoc>().await;
        doc.listings
            .into_iter()
            .find(|l| !flag_is_true(&l.is_deleted) && l.property_id.trim() == id.trim())
    }

    pub async fn insert(&self, record: ListingRecord) -> AppResult<ListingRecord> {
        self.store
            .update::<PropertyListingsDoc, _, _>(move |doc| {
                let saved = record.clone();
                doc.listings.push(record);
                Ok(saved)
            })
            .await
    }

    /// Reemplazo completo de campos, preservando PropertyID, CreatedBy y
    /// CreatedDate del registro almacenado.
    pub async fn replace(&self, id: &str, mut record: ListingRecord) -> AppResult<ListingRecord> {
        let id = id.trim().to_string();
        self.store
            .update::<PropertyListingsDoc, _, _>(move |doc| {
                let existing = doc
                    .listings
                    .iter_mut()
                    .find(|l| !flag_is_true(&l.is_deleted) && l.property_id.trim() == id)
                    .ok_or_else(|| not_found_error("Listing", &id))?;

                record.property_id = existing.property_id.clone();
                record.created_by = existing.created_by.clone();
                record.created_date = existing.created_date.clone();
                record.updated_date = now_iso();
                *existing = record;
                Ok(existing.clone())
            })
            .await
    }

    /// Marcar el deal como cerrado. Idempotente.
    pub async fn close(&self, id: &str) -> AppResult<ListingRecord> {
        self.set_flags(id, |l| l.is_closed = "true".to_string()).await
    }

    /// Reabrir un anuncio cerrado. Idempotente.
    pub async fn reopen(&self, id: &str) -> AppResult<ListingRecord> {
        self.set_flags(id, |l| l.is_closed = "false".to_string()).await
    }

    /// Borrado lógico: IsDeleted e IsActive cambian siempre juntos
    pub async fn soft_delete(&self, id: &str) -> AppResult<ListingRecord> {
        self.set_flags(id, |l| {
            l.is_deleted = "true".to_string();
            l.is_active = "false".to_string();
        })
        .await
    }

    /// Reasignar el propietario de todos los anuncios de `old_user_id`
    /// (cascada del cambio de UserID en el perfil). Devuelve cuántos
    /// registros se reescribieron.
    pub async fn reassign_owner(&self, old_user_id: &str, new_user_id: &str) -> AppResult<usize> {
        let old = old_user_id.to_string();
        let new = new_user_id.to_string();
        self.store
            .update::<PropertyListingsDoc, _, _>(move |doc| {
                let mut changed = 0;
                for listing in doc.listings.iter_mut().filter(|l| l.created_by == old) {
                    listing.created_by = new.clone();
                    listing.updated_date = now_iso();
                    changed += 1;
                }
                Ok(changed)
            })
            .await
    }

    async fn set_flags<F>(&self, id: &str, set: F) -> AppResult<ListingRecord>
    where
        F: FnOnce(&mut ListingRecord) + Send + 'static,
    {
        let id = id.trim().to_string();
        self.store
            .update::<PropertyListingsDoc, _, _>(move |doc| {
                let existing = doc
                    .listings
                    .iter_mut()
                    .find(|l| !flag_is_true(&l.is_deleted) && l.property_id.trim() == id)
                    .ok_or_else(|| not_found_error("Listing", &id))?;

                set(existing);
                existing.updated_date = now_iso();
                Ok(existing.clone())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn repo() -> (ListingRepository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(XmlStore::new(dir.path()));
        (ListingRepository::new(store), dir)
    }

    fn listing(id: &str, owner: &str) -> ListingRecord {
        ListingRecord {
            property_id: id.to_string(),
            property_type: "PT001".to_string(),
            listing_type: "LT002".to_string(),
            price: "500000".to_string(),
            country: "Singapore".to_string(),
            city: "Jurong".to_string(),
            created_by: owner.to_string(),
            created_date: "2024-01-01T00:00:00+00:00".to_string(),
            updated_date: "2024-01-01T00:00:00+00:00".to_string(),
            is_active: "true".to_string(),
            is_deleted: "false".to_string(),
            is_closed: "false".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let (repo, _dir) = repo();
        repo.insert(listing("p1", "bob")).await.unwrap();
        let found = repo.find_by_id("p1").await.unwrap();
        assert_eq!(found.created_by, "bob");
        assert!(repo.find_by_id("missing").await.is_none());
    }

    #[tokio::test]
    async fn browse_hides_closed_but_owner_view_does_not() {
        let (repo, _dir) = repo();
        repo.insert(listing("p1", "bob")).await.unwrap();
        repo.insert(listing("p2", "bob")).await.unwrap();
        repo.close("p2").await.unwrap();

        let browse = repo.find_all(ListingFilter::browse()).await;
        assert_eq!(browse.len(), 1);
        assert_eq!(browse[0].property_id, "p1");

        let mine = repo.find_all(ListingFilter::owner("bob".into())).await;
        assert_eq!(mine.len(), 2);

        // Aunque el filtro pida excluir cerrados, con propietario no aplica
        let forced = repo
            .find_all(ListingFilter {
                exclude_deleted: true,
                exclude_closed: true,
                created_by: Some("bob".into()),
            })
            .await;
        assert_eq!(forced.len(), 2);
    }

    #[tokio::test]
    async fn replace_preserves_created_by_and_date() {
        let (repo, _dir) = repo();
        repo.insert(listing("p1", "bob")).await.unwrap();

        let mut incoming = listing("whatever", "mallory");
        incoming.price = "750000".to_string();
        incoming.created_date = "1999-01-01T00:00:00+00:00".to_string();

        let updated = repo.replace("p1", incoming).await.unwrap();
        assert_eq!(updated.property_id, "p1");
        assert_eq!(updated.created_by, "bob");
        assert_eq!(updated.created_date, "2024-01-01T00:00:00+00:00");
        assert_eq!(updated.price, "750000");
        assert_ne!(updated.updated_date, "2024-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn close_then_reopen_round_trips() {
        let (repo, _dir) = repo();
        repo.insert(listing("p1", "bob")).await.unwrap();

        let closed = repo.close("p1").await.unwrap();
        assert_eq!(closed.is_closed, "true");

        let reopened = repo.reopen("p1").await.unwrap();
        assert_eq!(reopened.is_closed, "false");
        assert_eq!(reopened.is_active, "true");
        assert_eq!(reopened.is_deleted, "false");

        // Idempotencia: reabrir lo ya abierto sigue siendo 200
        assert!(repo.reopen("p1").await.is_ok());
        assert!(repo.close("p1").await.is_ok());
        assert!(repo.close("p1").await.is_ok());
    }

    #[tokio::test]
    async fn soft_delete_is_terminal_and_invisible() {
        let (repo, _dir) = repo();
        repo.insert(listing("p1", "bob")).await.unwrap();

        let deleted = repo.soft_delete("p1").await.unwrap();
        assert_eq!(deleted.is_deleted, "true");
        assert_eq!(deleted.is_active, "false");

        assert!(repo.find_by_id("p1").await.is_none());
        assert!(repo.find_all(ListingFilter::browse()).await.is_empty());
        assert!(repo.find_all(ListingFilter::owner("bob".into())).await.is_empty());

        // Ninguna transición sale de DELETED: todo reporta not-found
        assert!(matches!(repo.close("p1").await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.reopen("p1").await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.soft_delete("p1").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            repo.replace("p1", listing("p1", "bob")).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn reassign_owner_cascades() {
        let (repo, _dir) = repo();
        repo.insert(listing("p1", "bob")).await.unwrap();
        repo.insert(listing("p2", "bob")).await.unwrap();
        repo.insert(listing("p3", "alice")).await.unwrap();

        let changed = repo.reassign_owner("bob", "robert").await.unwrap();
        assert_eq!(changed, 2);
        assert_eq!(repo.find_all(ListingFilter::owner("robert".into())).await.len(), 2);
        assert!(repo.find_all(ListingFilter::owner("bob".into())).await.is_empty());
        assert_eq!(repo.find_all(ListingFilter::owner("alice".into())).await.len(), 1);
    }
}

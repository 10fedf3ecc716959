//! Repositorio de contadores de acciones de UI

use std::sync::Arc;

use crate::models::url_hit::{UrlHitCountsDoc, UrlHitRecord};
use crate::store::XmlStore;
use crate::utils::errors::AppResult;
use crate::utils::validation::now_iso;

pub struct UrlHitRepository {
    store: Arc<XmlStore>,
}

impl UrlHitRepository {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<UrlHitRecord> {
        self.store.load::<UrlHitCountsDoc>().await.hits
    }

    /// Incrementar el contador de `key`. Con `url` no vacía la fila se
    /// identifica por la URL; con `url` vacía, por la clave.
    pub async fn increment(&self, key: String, url: String) -> AppResult<UrlHitRecord> {
        self.store
            .update::<UrlHitCountsDoc, _, _>(move |doc| {
                let existing = doc.hits.iter_mut().find(|h| {
                    if url.is_empty() {
                        h.url.is_empty() && h.key == key
                    } else {
                        h.url == url
                    }
                });

                let row = match existing {
                    Some(row) => {
                        row.count = (row.count_value() + 1).to_string();
                        row.updated_date = now_iso();
                        row.clone()
                    }
                    None => {
                        let row = UrlHitRecord {
                            key,
                            url,
                            count: "1".to_string(),
                            updated_date: now_iso(),
                        };
                        doc.hits.push(row.clone());
                        row
                    }
                };
                Ok(row)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> (UrlHitRepository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(XmlStore::new(dir.path()));
        (UrlHitRepository::new(store), dir)
    }

    #[tokio::test]
    async fn keyed_counter_increments() {
        let (repo, _dir) = repo();
        repo.increment("map_view".into(), String::new()).await.unwrap();
        let row = repo.increment("map_view".into(), String::new()).await.unwrap();
        assert_eq!(row.count, "2");
        assert_eq!(repo.all().await.len(), 1);
    }

    #[tokio::test]
    async fn distinct_urls_share_a_key_but_count_separately() {
        let (repo, _dir) = repo();
        repo.increment("listing_view".into(), "/listings/a".into()).await.unwrap();
        repo.increment("listing_view".into(), "/listings/b".into()).await.unwrap();
        repo.increment("listing_view".into(), "/listings/a".into()).await.unwrap();

        let rows = repo.all().await;
        assert_eq!(rows.len(), 2);
        let total: u64 = rows
            .iter()
            .filter(|r| r.key == "listing_view")
            .map(|r| r.count_value())
            .sum();
        assert_eq!(total, 3);
    }
}

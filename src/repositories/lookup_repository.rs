//! Repositorio de tablas de referencia (solo lectura)

use std::sync::Arc;

use crate::models::lookup::{
    ListingTypesDoc, LookupRecord, PropertySubTypesDoc, PropertyTypesDoc,
};
use crate::store::XmlStore;

pub struct LookupRepository {
    store: Arc<XmlStore>,
}

impl LookupRepository {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self { store }
    }

    pub async fn property_types(&self) -> Vec<LookupRecord> {
        active(self.store.load::<PropertyTypesDoc>().await.rows)
    }

    pub async fn listing_types(&self) -> Vec<LookupRecord> {
        active(self.store.load::<ListingTypesDoc>().await.rows)
    }

    pub async fn property_sub_types(&self) -> Vec<LookupRecord> {
        active(self.store.load::<PropertySubTypesDoc>().await.rows)
    }
}

// Inclusivo por defecto: solo el literal "false" excluye una fila;
// ausente, "true" o cualquier otro valor pasan el filtro.
fn active(rows: Vec<LookupRecord>) -> Vec<LookupRecord> {
    rows.into_iter().filter(|r| r.is_active != "false").collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_false_is_excluded() {
        let rows = vec![
            LookupRecord { type_id: "1".into(), type_name: "a".into(), is_active: "true".into() },
            LookupRecord { type_id: "2".into(), type_name: "b".into(), is_active: "false".into() },
            LookupRecord { type_id: "3".into(), type_name: "c".into(), is_active: String::new() },
            LookupRecord { type_id: "4".into(), type_name: "d".into(), is_active: "False".into() },
        ];
        let kept = active(rows);
        let ids: Vec<_> = kept.iter().map(|r| r.type_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }
}

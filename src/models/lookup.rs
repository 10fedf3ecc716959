//! Tablas de referencia de solo lectura
//!
//! PropertyTypes, ListingTypes y PropertySubTypes son catálogos estáticos
//! que la API nunca modifica.

use serde::{Deserialize, Serialize};

use crate::store::Document;

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct LookupRecord {
    #[serde(rename = "TypeID")]
    pub type_id: String,
    pub type_name: String,
    pub is_active: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PropertyTypesDoc {
    #[serde(rename = "PropertyType", default)]
    pub rows: Vec<LookupRecord>,
}

impl Document for PropertyTypesDoc {
    const ROOT: &'static str = "PropertyTypes";
    const FILE: &'static str = "property_types.xml";
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListingTypesDoc {
    #[serde(rename = "ListingType", default)]
    pub rows: Vec<LookupRecord>,
}

impl Document for ListingTypesDoc {
    const ROOT: &'static str = "ListingTypes";
    const FILE: &'static str = "listing_types.xml";
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PropertySubTypesDoc {
    #[serde(rename = "PropertySubType", default)]
    pub rows: Vec<LookupRecord>,
}

impl Document for PropertySubTypesDoc {
    const ROOT: &'static str = "PropertySubTypes";
    const FILE: &'static str = "property_subtypes.xml";
}

//! Modelo de PropertyListing
//!
//! El anuncio inmobiliario es el registro central del sistema. Todos los
//! campos se persisten como strings en el documento XML; los booleanos son
//! los literales "true"/"false". El campo PropertySubType es especial:
//! cuando el anuncio es un alquiler por habitaciones contiene un array JSON
//! de [`RoomUnit`]; en un anuncio de unidad completa queda vacío.

use serde::{Deserialize, Serialize};

use crate::store::Document;

/// SubTypeID centinela que identifica "unidad completa, sin división
/// por habitaciones".
pub const WHOLE_UNIT_SUBTYPE: &str = "RST001";

/// Documento persistido de anuncios (PropertyListings/PropertyListing)
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PropertyListingsDoc {
    #[serde(rename = "PropertyListing", default)]
    pub listings: Vec<ListingRecord>,
}

impl Document for PropertyListingsDoc {
    const ROOT: &'static str = "PropertyListings";
    const FILE: &'static str = "property_listings.xml";
}

/// Registro plano de un anuncio, tal como se persiste
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListingRecord {
    #[serde(rename = "PropertyID")]
    pub property_id: String,
    pub property_type: String,
    pub listing_type: String,
    pub property_sub_type: String,
    pub price: String,
    pub rent_term: String,
    pub currency: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area_size: String,
    pub available_from: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub gender_preference: String,
    pub description: String,
    pub remark: String,
    pub created_by: String,
    pub created_date: String,
    pub updated_date: String,
    pub is_active: String,
    pub is_deleted: String,
    pub is_closed: String,
}

/// Habitación embebida dentro de un anuncio por habitaciones.
///
/// No es una entidad almacenada por sí misma: vive exclusivamente dentro
/// del payload JSON del campo PropertySubType de su anuncio padre.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoomUnit {
    #[serde(rename = "SubTypeID")]
    pub sub_type_id: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "PubIncluded")]
    pub pub_included: bool,
    #[serde(rename = "RentalBasis")]
    pub rental_basis: RentalBasis,
    #[serde(rename = "TotalBeds")]
    pub total_beds: u32,
    #[serde(rename = "BedsForRent")]
    pub beds_for_rent: u32,
    #[serde(rename = "GenderPref")]
    pub gender_pref: String,
    #[serde(rename = "RegistrationProvided")]
    pub registration_provided: bool,
    #[serde(rename = "Remark")]
    pub remark: String,
}

/// Modalidad de alquiler de una habitación
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RentalBasis {
    #[default]
    Whole,
    Shared,
}

/// Decodificar el payload de PropertySubType como habitaciones.
///
/// Devuelve `Some(units)` solo si el payload es un array JSON no vacío cuyo
/// primer elemento NO es la unidad completa centinela. Cualquier fallo de
/// parseo clasifica como "no es alquiler por habitaciones" (se cae al lado
/// simple, nunca se rechaza la request por un payload raro).
pub fn decode_room_units(payload: &str) -> Option<Vec<RoomUnit>> {
    let units: Vec<RoomUnit> = serde_json::from_str(payload).ok()?;
    match units.first() {
        Some(first) if first.sub_type_id != WHOLE_UNIT_SUBTYPE => Some(units),
        _ => None,
    }
}

impl ListingRecord {
    /// Habitaciones embebidas, si el anuncio es un alquiler por habitaciones
    pub fn room_units(&self) -> Option<Vec<RoomUnit>> {
        decode_room_units(&self.property_sub_type)
    }

    pub fn is_room_rental(&self) -> bool {
        self.room_units().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_payload_is_whole_unit() {
        let payload = r#"[{"SubTypeID":"RST001","Label":"Entire flat"}]"#;
        assert!(decode_room_units(payload).is_none());
    }

    #[test]
    fn non_sentinel_payload_is_room_rental() {
        let payload = r#"[{"SubTypeID":"RM002","Label":"Master room","Price":"800","RentalBasis":"Shared","TotalBeds":2,"BedsForRent":1}]"#;
        let units = decode_room_units(payload).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].label, "Master room");
        assert_eq!(units[0].rental_basis, RentalBasis::Shared);
    }

    #[test]
    fn garbage_and_empty_payloads_are_whole_unit() {
        assert!(decode_room_units("").is_none());
        assert!(decode_room_units("[]").is_none());
        assert!(decode_room_units("not json").is_none());
        assert!(decode_room_units("{\"SubTypeID\":\"RM002\"}").is_none());
    }
}

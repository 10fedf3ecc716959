//! Controller del ciclo de vida de anuncios
//!
//! Valida lo que el repositorio no conoce (campos obligatorios, forma del
//! pricing) antes de delegar. La regla de clasificación: un anuncio es
//! alquiler por habitaciones si su payload PropertySubType decodifica a un
//! array de RoomUnit cuyo primer SubTypeID no es la unidad completa. En ese
//! caso el pricing vive en cada habitación y Price/Bedrooms/Bathrooms/
//! AreaSize se fuerzan en blanco; si no, Price debe ser positivo y el
//! payload se persiste vacío.

use std::sync::Arc;

use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::listing_dto::SaveListingRequest;
use crate::models::listing::{decode_room_units, ListingRecord, RentalBasis, RoomUnit};
use crate::repositories::listing_repository::{ListingFilter, ListingRepository};
use crate::store::XmlStore;
use crate::utils::errors::{not_found_error, required_field_error, AppError, AppResult};
use crate::utils::validation::{now_iso, validate_positive_price};

pub struct ListingController {
    repository: ListingRepository,
}

impl ListingController {
    pub fn new(store: Arc<XmlStore>) -> Self {
        Self {
            repository: ListingRepository::new(store),
        }
    }

    pub async fn browse(&self, created_by: Option<String>) -> Vec<ListingRecord> {
        let filter = match created_by.filter(|c| !c.trim().is_empty()) {
            Some(owner) => ListingFilter::owner(owner),
            None => ListingFilter::browse(),
        };
        self.repository.find_all(filter).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<ListingRecord> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Listing", id))
    }

    pub async fn create(&self, request: SaveListingRequest) -> AppResult<ApiResponse<ListingRecord>> {
        let mut record = shaped_record(request)?;

        let now = now_iso();
        record.property_id = Uuid::new_v4().to_string();
        record.created_date = now.clone();
        record.updated_date = now;
        record.is_active = "true".to_string();
        record.is_deleted = "false".to_string();

        let saved = self.repository.insert(record).await?;
        Ok(ApiResponse::success_with_message(
            saved,
            "Anuncio publicado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: &str,
        request: SaveListingRequest,
    ) -> AppResult<ApiResponse<ListingRecord>> {
        let mut record = shaped_record(request)?;
        record.is_active = "true".to_string();
        record.is_deleted = "false".to_string();

        // CreatedBy y CreatedDate los conserva el repositorio del registro
        // almacenado; lo que venga en el body se descarta.
        let updated = self.repository.replace(id, record).await?;
        Ok(ApiResponse::success_with_message(
            updated,
            "Anuncio actualizado exitosamente".to_string(),
        ))
    }

    pub async fn close(&self, id: &str) -> AppResult<ApiResponse<ListingRecord>> {
        let closed = self.repository.close(id).await?;
        Ok(ApiResponse::success_with_message(
            closed,
            "Anuncio marcado como cerrado".to_string(),
        ))
    }

    pub async fn reopen(&self, id: &str) -> AppResult<ApiResponse<ListingRecord>> {
        let reopened = self.repository.reopen(id).await?;
        Ok(ApiResponse::success_with_message(
            reopened,
            "Anuncio reabierto".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> AppResult<ApiResponse<ListingRecord>> {
        let deleted = self.repository.soft_delete(id).await?;
        Ok(ApiResponse::success_with_message(
            deleted,
            "Anuncio eliminado exitosamente".to_string(),
        ))
    }
}

/// Construir el registro a persistir a partir de la request, aplicando
/// obligatorios y la forma de pricing que corresponda.
fn shaped_record(request: SaveListingRequest) -> AppResult<ListingRecord> {
    for (value, field) in [
        (&request.property_type, "PropertyType"),
        (&request.listing_type, "ListingType"),
        (&request.created_by, "CreatedBy"),
        (&request.country, "Country"),
        (&request.city, "City"),
    ] {
        if value.trim().is_empty() {
            return Err(required_field_error(field));
        }
    }

    let mut record = ListingRecord {
        property_type: request.property_type,
        listing_type: request.listing_type,
        rent_term: request.rent_term,
        currency: request.currency,
        country: request.country,
        city: request.city,
        address: request.address,
        postal_code: request.postal_code,
        available_from: request.available_from,
        contact_phone: request.contact_phone,
        contact_email: request.contact_email,
        gender_preference: request.gender_preference,
        description: request.description,
        remark: request.remark,
        created_by: request.created_by,
        is_closed: if request.is_closed == "true" {
            "true".to_string()
        } else {
            "false".to_string()
        },
        ..Default::default()
    };

    match decode_room_units(&request.property_sub_type) {
        Some(units) => {
            validate_room_units(&units)?;
            record.property_sub_type = serde_json::to_string(&units)
                .map_err(|e| AppError::Internal(format!("Error codificando habitaciones: {}", e)))?;
            record.price = "0".to_string();
            record.bedrooms = String::new();
            record.bathrooms = String::new();
            record.area_size = String::new();
        }
        None => {
            validate_positive_price(&request.price)?;
            record.property_sub_type = String::new();
            record.price = request.price;
            record.bedrooms = request.bedrooms;
            record.bathrooms = request.bathrooms;
            record.area_size = request.area_size;
        }
    }

    Ok(record)
}

fn validate_room_units(units: &[RoomUnit]) -> AppResult<()> {
    for unit in units {
        if unit.rental_basis == RentalBasis::Shared && unit.beds_for_rent > unit.total_beds {
            return Err(AppError::ValidationError(format!(
                "La habitación \"{}\" ofrece más camas de las que tiene (BedsForRent > TotalBeds)",
                unit.label
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> SaveListingRequest {
        SaveListingRequest {
            property_type: "PT001".to_string(),
            listing_type: "LT002".to_string(),
            created_by: "bob".to_string(),
            country: "Singapore".to_string(),
            city: "Jurong".to_string(),
            price: "500000".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            area_size: "110".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn whole_unit_keeps_price_and_blanks_payload() {
        let record = shaped_record(base_request()).unwrap();
        assert_eq!(record.price, "500000");
        assert_eq!(record.property_sub_type, "");
        assert_eq!(record.bedrooms, "3");
        assert_eq!(record.is_closed, "false");
    }

    #[test]
    fn sentinel_payload_still_requires_price() {
        let mut request = base_request();
        request.property_sub_type = r#"[{"SubTypeID":"RST001"}]"#.to_string();
        request.price = "0".to_string();
        assert!(shaped_record(request).is_err());

        let mut request = base_request();
        request.property_sub_type = r#"[{"SubTypeID":"RST001"}]"#.to_string();
        let record = shaped_record(request).unwrap();
        assert_eq!(record.property_sub_type, "");
        assert_eq!(record.bedrooms, "3");
    }

    #[test]
    fn room_rental_forces_blank_unit_fields() {
        let mut request = base_request();
        request.property_sub_type =
            r#"[{"SubTypeID":"RM002","Label":"Common room","Price":"650"}]"#.to_string();
        request.price = "999999".to_string();

        let record = shaped_record(request).unwrap();
        assert_eq!(record.price, "0");
        assert_eq!(record.bedrooms, "");
        assert_eq!(record.bathrooms, "");
        assert_eq!(record.area_size, "");
        assert!(record.is_room_rental());
    }

    #[test]
    fn shared_room_cannot_rent_more_beds_than_it_has() {
        let mut request = base_request();
        request.property_sub_type = r#"[{"SubTypeID":"RM002","Label":"Bunk room","RentalBasis":"Shared","TotalBeds":2,"BedsForRent":3}]"#.to_string();
        assert!(shaped_record(request).is_err());

        let mut request = base_request();
        request.property_sub_type = r#"[{"SubTypeID":"RM002","Label":"Bunk room","RentalBasis":"Shared","TotalBeds":4,"BedsForRent":3}]"#.to_string();
        assert!(shaped_record(request).is_ok());
    }

    #[test]
    fn missing_required_field_rejected() {
        let mut request = base_request();
        request.city = String::new();
        assert!(matches!(
            shaped_record(request),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn garbage_payload_falls_back_to_whole_unit() {
        let mut request = base_request();
        request.property_sub_type = "definitely not json".to_string();
        let record = shaped_record(request).unwrap();
        assert_eq!(record.property_sub_type, "");
        assert_eq!(record.price, "500000");
    }
}

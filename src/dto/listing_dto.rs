use serde::Deserialize;

// Request para crear o reemplazar un anuncio. Los clientes envían las
// mismas claves PascalCase que se persisten; los campos ausentes llegan
// como string vacío y la validación de obligatorios vive en el controller.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SaveListingRequest {
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
    pub is_closed: String,
}

// Query string del browse: /listings?createdBy=...
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
}

//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de los valores string del almacenamiento XML.

use crate::utils::errors::{AppError, AppResult};

/// Interpretar un flag persistido ("true"/"false") como booleano.
/// Cualquier valor distinto del literal "true" cuenta como falso.
pub fn flag_is_true(value: &str) -> bool {
    value == "true"
}

/// Representación string de un booleano para el almacenamiento XML
pub fn flag(value: bool) -> String {
    if value { "true".to_string() } else { "false".to_string() }
}

/// Normalizar un número de teléfono dejando solo los dígitos.
/// "+65 9123-4567" y "91234567" normalizan al mismo valor.
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validar que un precio sea un número positivo
pub fn validate_positive_price(value: &str) -> AppResult<f64> {
    let price: f64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::ValidationError(format!("Precio inválido: \"{}\"", value)))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::ValidationError(
            "El precio debe ser un número positivo".to_string(),
        ));
    }
    Ok(price)
}

/// Validar que un rating sea un valor entero entre 1 y 5
pub fn validate_rating(value: &str) -> AppResult<i64> {
    let rating: f64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::ValidationError(format!("Rating inválido: \"{}\"", value)))?;
    if rating.fract() != 0.0 || !(1.0..=5.0).contains(&rating) {
        return Err(AppError::ValidationError(
            "El rating debe ser un entero entre 1 y 5".to_string(),
        ));
    }
    Ok(rating as i64)
}

/// Timestamp actual en formato ISO-8601, como se persiste en los documentos
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_phone_strips_non_digits() {
        assert_eq!(normalize_phone("+65 9123-4567"), "6591234567");
        assert_eq!(normalize_phone("91234567"), "91234567");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn positive_price_accepted() {
        assert!(validate_positive_price("500000").is_ok());
        assert!(validate_positive_price(" 1250.50 ").is_ok());
    }

    #[test]
    fn non_positive_or_garbage_price_rejected() {
        assert!(validate_positive_price("0").is_err());
        assert!(validate_positive_price("-10").is_err());
        assert!(validate_positive_price("abc").is_err());
        assert!(validate_positive_price("").is_err());
    }

    #[test]
    fn rating_bounds() {
        assert_eq!(validate_rating("1").unwrap(), 1);
        assert_eq!(validate_rating("5").unwrap(), 5);
        assert_eq!(validate_rating("3.0").unwrap(), 3);
        assert!(validate_rating("0").is_err());
        assert!(validate_rating("6").is_err());
        assert!(validate_rating("4.5").is_err());
        assert!(validate_rating("x").is_err());
    }
}

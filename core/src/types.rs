//! Domain DTOs for the car-catalog and brand-lookup services.
//!
//! # Design
//! These types mirror the remote services' JSON but are defined
//! independently of the mock-server crate; integration tests catch any
//! schema drift. Catalog fields are serde-defaulted so a partial server
//! payload still decodes — the layer treats them as opaque data and never
//! validates them.

use serde::{Deserialize, Serialize};

/// A single catalog entry from the car service.
///
/// `id` is assigned by the server on create and absent before then; it is
/// serialized as `_id` and omitted from request bodies while absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub price: f64,
}

/// One manufacturer entry from the FIPE brand lookup. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    #[serde(default)]
    pub fipe_name: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_without_id_omits_underscore_id_field() {
        let car = Car {
            id: None,
            brand: "VW".to_string(),
            model: "Gol".to_string(),
            year: 1994,
            price: 25000.0,
        };
        let json = serde_json::to_value(&car).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["model"], "Gol");
    }

    #[test]
    fn car_with_id_serializes_underscore_id_field() {
        let car = Car {
            id: Some("42".to_string()),
            brand: String::new(),
            model: String::new(),
            year: 0,
            price: 0.0,
        };
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["_id"], "42");
    }

    #[test]
    fn partial_car_payload_decodes_with_defaults() {
        let car: Car = serde_json::from_str(r#"{"model":"Gol"}"#).unwrap();
        assert!(car.id.is_none());
        assert_eq!(car.model, "Gol");
        assert_eq!(car.brand, "");
        assert_eq!(car.year, 0);
    }

    #[test]
    fn car_roundtrips_through_json() {
        let car = Car {
            id: Some("5f0a1b".to_string()),
            brand: "Fiat".to_string(),
            model: "Uno".to_string(),
            year: 2001,
            price: 12500.5,
        };
        let json = serde_json::to_string(&car).unwrap();
        let back: Car = serde_json::from_str(&json).unwrap();
        assert_eq!(back, car);
    }

    #[test]
    fn brand_decodes_fipe_shape() {
        let brand: Brand =
            serde_json::from_str(r#"{"fipe_name":"Acura","id":1,"key":"acura-1","name":"Acura"}"#)
                .unwrap();
        assert_eq!(brand.name, "Acura");
        assert_eq!(brand.fipe_name, "Acura");
    }

    #[test]
    fn brand_rejects_missing_name() {
        let result: Result<Brand, _> = serde_json::from_str(r#"{"fipe_name":"Acura"}"#);
        assert!(result.is_err());
    }
}

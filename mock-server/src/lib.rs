//! In-memory rendition of the two remote services the access layer talks
//! to: the car catalog under `/cars` and the FIPE brand table under
//! `/api/1/carros/marcas.json`.
//!
//! Mutation endpoints answer 200 on success, matching the live service's
//! contract. `POST /cars/` (trailing slash) is registered because clients
//! posting an id-less car concatenate an empty id onto the path.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Brand {
    pub fipe_name: String,
    pub name: String,
}

// BTreeMap keeps list order stable across runs.
pub type Db = Arc<RwLock<BTreeMap<String, Car>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/", post(create_car))
        .route("/cars/{id}", axum::routing::put(update_car).delete(delete_car))
        .route("/api/1/carros/marcas.json", get(list_brands))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_cars(State(db): State<Db>) -> Json<Vec<Car>> {
    let cars = db.read().await;
    Json(cars.values().cloned().collect())
}

async fn create_car(State(db): State<Db>, Json(mut input): Json<Car>) -> (StatusCode, Json<Car>) {
    let id = Uuid::new_v4().to_string();
    input.id = Some(id.clone());
    db.write().await.insert(id, input.clone());
    (StatusCode::OK, Json(input))
}

async fn update_car(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(mut input): Json<Car>,
) -> Result<Json<Car>, StatusCode> {
    let mut cars = db.write().await;
    if !cars.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    input.id = Some(id.clone());
    cars.insert(id, input.clone());
    Ok(Json(input))
}

async fn delete_car(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut cars = db.write().await;
    if cars.remove(&id).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn list_brands() -> Json<Vec<Brand>> {
    let brands = ["Acura", "Agrale", "Fiat", "Volkswagen"]
        .into_iter()
        .map(|name| Brand {
            fipe_name: name.to_string(),
            name: name.to_string(),
        })
        .collect();
    Json(brands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_serializes_id_as_underscore_id() {
        let car = Car {
            id: Some("abc".to_string()),
            brand: "VW".to_string(),
            model: "Gol".to_string(),
            year: 1994,
            price: 25000.0,
        };
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["brand"], "VW");
    }

    #[test]
    fn car_without_id_omits_the_field() {
        let car = Car {
            id: None,
            brand: String::new(),
            model: String::new(),
            year: 0,
            price: 0.0,
        };
        let json = serde_json::to_value(&car).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn car_decodes_partial_payload() {
        let car: Car = serde_json::from_str(r#"{"model":"Gol"}"#).unwrap();
        assert_eq!(car.model, "Gol");
        assert!(car.id.is_none());
        assert_eq!(car.year, 0);
    }

    #[test]
    fn brand_roundtrips_through_json() {
        let brand = Brand {
            fipe_name: "Acura".to_string(),
            name: "Acura".to_string(),
        };
        let json = serde_json::to_string(&brand).unwrap();
        let back: Brand = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, brand.name);
        assert_eq!(back.fipe_name, brand.fipe_name);
    }
}

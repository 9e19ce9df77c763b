//! REST routes for the fruits domain.
//!
//! Handlers only decode requests and encode responses; all rules live in the
//! actions.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domains::fruits::actions::{
    create_fruit, delete_fruit, get_fruit, search_fruits, update_fruit, CreateFruitInput,
    SearchFruitsInput, UpdateFruitInput,
};
use crate::domains::fruits::{FruitData, SearchFruitsData};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::Owner;

/// Body of `POST /fruits`; the owner comes from the `x-owner` header
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateFruitRequest {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Body of `PUT /fruits/:id`; unknown fields such as `name` are ignored
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateFruitRequest {
    pub quantity: i64,
    pub price: f64,
}

/// Query of `GET /fruits/search`
#[derive(Debug, Default, PartialEq)]
pub struct SearchFruitsQuery {
    pub name: Option<String>,
    pub status: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl SearchFruitsQuery {
    /// Pick the known keys out of the raw pairs; the first value of a
    /// repeated key wins and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "status" => &mut query.status,
                "offset" => &mut query.offset,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }
}

impl From<SearchFruitsQuery> for SearchFruitsInput {
    fn from(query: SearchFruitsQuery) -> Self {
        Self {
            name: query.name.unwrap_or_default(),
            status: query.status.unwrap_or_default(),
            offset: parse_or_zero(query.offset.as_deref()),
            limit: parse_or_zero(query.limit.as_deref()),
        }
    }
}

/// Missing or non-numeric paging values become 0 and fail validation later.
fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

fn decode<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!("Undecodable request body: {}", rejection);
        ApiError::invalid_body()
    })
}

fn fruit_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Undecodable fruit id: {}", rejection);
        ApiError::invalid_id()
    })
}

/// POST /fruits
pub async fn create_fruit_handler(
    Extension(state): Extension<AppState>,
    Extension(Owner(owner)): Extension<Owner>,
    body: Result<Json<CreateFruitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FruitData>), ApiError> {
    let request = decode(body)?;

    let input = CreateFruitInput {
        name: request.name,
        owner,
        quantity: request.quantity,
        price: request.price,
    };

    let fruit = create_fruit(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(fruit)))
}

/// GET /fruits/:id
pub async fn get_fruit_handler(
    Extension(state): Extension<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<FruitData>, ApiError> {
    let id = fruit_id(path)?;
    Ok(Json(get_fruit(&id, &state.deps).await?))
}

/// PUT /fruits/:id
pub async fn update_fruit_handler(
    Extension(state): Extension<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateFruitRequest>, JsonRejection>,
) -> Result<Json<FruitData>, ApiError> {
    let id = fruit_id(path)?;
    let request = decode(body)?;

    let input = UpdateFruitInput {
        id,
        quantity: request.quantity,
        price: request.price,
    };

    Ok(Json(update_fruit(input, &state.deps).await?))
}

/// DELETE /fruits/:id
pub async fn delete_fruit_handler(
    Extension(state): Extension<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<FruitData>, ApiError> {
    let id = fruit_id(path)?;
    Ok(Json(delete_fruit(&id, &state.deps).await?))
}

/// GET /fruits/search
pub async fn search_fruits_handler(
    Extension(state): Extension<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SearchFruitsData>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!("Undecodable search query: {}", rejection);
        ApiError::invalid_query()
    })?;

    let input = SearchFruitsInput::from(SearchFruitsQuery::from_pairs(pairs));
    Ok(Json(search_fruits(input, &state.deps).await?))
}

use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::pagination::Paginated;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::find_all::FindAllProductsParams;
use business::domain::product::use_cases::update::UpdateProductParams;

use crate::rpc::error::RpcError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

impl CreateProductRequest {
    pub fn into_params(self) -> Result<CreateProductParams, RpcError> {
        let mut errors = Vec::new();
        check_name(&self.name, &mut errors);
        check_price(self.price, &mut errors);
        if !errors.is_empty() {
            return Err(RpcError::validation(errors));
        }

        Ok(CreateProductParams {
            name: self.name,
            price: self.price,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationRequest {
    pub fn into_params(self) -> Result<FindAllProductsParams, RpcError> {
        let mut errors = Vec::new();
        let page = positive("page", self.page, &mut errors);
        let limit = positive("limit", self.limit, &mut errors);
        if !errors.is_empty() {
            return Err(RpcError::validation(errors));
        }

        Ok(FindAllProductsParams { page, limit })
    }
}

/// Partial update. Fields other than `name` and `price` are ignored, so the
/// availability flag can't be changed through here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    pub fn into_params(self) -> Result<UpdateProductParams, RpcError> {
        let mut errors = Vec::new();
        let id = checked_id(self.id, &mut errors);
        if let Some(name) = &self.name {
            check_name(name, &mut errors);
        }
        if let Some(price) = self.price {
            check_price(price, &mut errors);
        }

        match id {
            Some(id) if errors.is_empty() => Ok(UpdateProductParams {
                id,
                name: self.name,
                price: self.price,
            }),
            _ => Err(RpcError::validation(errors)),
        }
    }
}

/// Reads a product id from either `{"id": ..}` or a bare value. Numeric
/// strings are accepted like numbers.
pub fn parse_product_id(data: &Value) -> Result<ProductId, RpcError> {
    let raw = match data {
        Value::Object(map) => map.get("id"),
        other => Some(other),
    };

    let id = match raw {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| RpcError::bad_request("Validation failed (numeric string is expected)"))?;

    let mut errors = Vec::new();
    checked_id(id, &mut errors).ok_or_else(|| RpcError::validation(errors))
}

fn check_name(name: &str, errors: &mut Vec<String>) {
    if name.trim().is_empty() {
        errors.push("name should not be empty".to_string());
    }
}

fn check_price(price: f64, errors: &mut Vec<String>) {
    if !price.is_finite() {
        errors.push("price must be a number".to_string());
    } else if price < 0.0 {
        errors.push("price must not be less than 0".to_string());
    }
}

fn checked_id(id: i64, errors: &mut Vec<String>) -> Option<ProductId> {
    match ProductId::try_from(id) {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.push("id must be a positive number".to_string());
            None
        }
    }
}

fn positive(field: &str, value: Option<i64>, errors: &mut Vec<String>) -> Option<NonZeroU32> {
    let value = value?;
    match u32::try_from(value).ok().and_then(NonZeroU32::new) {
        Some(value) => Some(value),
        None => {
            errors.push(format!("{field} must be a positive number"));
            None
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            available: product.available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaResponse {
    pub page: u32,
    pub total: u64,
    pub last_page: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedProductsResponse {
    pub data: Vec<ProductResponse>,
    pub meta: PageMetaResponse,
}

impl From<Paginated<Product>> for PaginatedProductsResponse {
    fn from(page: Paginated<Product>) -> Self {
        Self {
            data: page.data.into_iter().map(ProductResponse::from).collect(),
            meta: PageMetaResponse {
                page: page.meta.page,
                total: page.meta.total,
                last_page: page.meta.last_page,
            },
        }
    }
}

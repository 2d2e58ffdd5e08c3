use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::find_all::FindAllProductsUseCase;
use business::domain::product::use_cases::find_one::{
    FindOneProductParams, FindOneProductUseCase,
};
use business::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::rpc::dispatcher::MessageHandler;
use crate::rpc::error::{IntoRpcError, RpcError};
use crate::rpc::product::dto::{
    CreateProductRequest, PaginatedProductsResponse, PaginationRequest, ProductResponse,
    UpdateProductRequest, parse_product_id,
};

/// Message patterns served for the product resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCommand {
    Create,
    FindAll,
    FindOne,
    Update,
    Delete,
}

impl FromStr for ProductCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_product" => Ok(ProductCommand::Create),
            "find_all_products" => Ok(ProductCommand::FindAll),
            "find_one_product" => Ok(ProductCommand::FindOne),
            "update_product" => Ok(ProductCommand::Update),
            "delete_product" => Ok(ProductCommand::Delete),
            _ => Err(format!("Unknown product command: {}", s)),
        }
    }
}

pub struct ProductController {
    create_use_case: Arc<dyn CreateProductUseCase>,
    find_all_use_case: Arc<dyn FindAllProductsUseCase>,
    find_one_use_case: Arc<dyn FindOneProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    remove_use_case: Arc<dyn RemoveProductUseCase>,
}

impl ProductController {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        find_all_use_case: Arc<dyn FindAllProductsUseCase>,
        find_one_use_case: Arc<dyn FindOneProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        remove_use_case: Arc<dyn RemoveProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            find_all_use_case,
            find_one_use_case,
            update_use_case,
            remove_use_case,
        }
    }

    async fn create(&self, data: Value) -> Result<Value, RpcError> {
        let params = decode::<CreateProductRequest>(data)?.into_params()?;
        let product = self
            .create_use_case
            .execute(params)
            .await
            .map_err(IntoRpcError::into_rpc_error)?;
        encode(ProductResponse::from(product))
    }

    async fn find_all(&self, data: Value) -> Result<Value, RpcError> {
        let params = decode::<Option<PaginationRequest>>(data)?
            .unwrap_or_default()
            .into_params()?;
        let page = self
            .find_all_use_case
            .execute(params)
            .await
            .map_err(IntoRpcError::into_rpc_error)?;
        encode(PaginatedProductsResponse::from(page))
    }

    async fn find_one(&self, data: Value) -> Result<Value, RpcError> {
        let id = parse_product_id(&data)?;
        let product = self
            .find_one_use_case
            .execute(FindOneProductParams { id })
            .await
            .map_err(IntoRpcError::into_rpc_error)?;
        encode(ProductResponse::from(product))
    }

    async fn update(&self, data: Value) -> Result<Value, RpcError> {
        let params = decode::<UpdateProductRequest>(data)?.into_params()?;
        let product = self
            .update_use_case
            .execute(params)
            .await
            .map_err(IntoRpcError::into_rpc_error)?;
        encode(ProductResponse::from(product))
    }

    async fn remove(&self, data: Value) -> Result<Value, RpcError> {
        let id = parse_product_id(&data)?;
        let product = self
            .remove_use_case
            .execute(RemoveProductParams { id })
            .await
            .map_err(IntoRpcError::into_rpc_error)?;
        encode(ProductResponse::from(product))
    }
}

#[async_trait]
impl MessageHandler for ProductController {
    async fn handle(&self, command: &str, data: Value) -> Option<Result<Value, RpcError>> {
        let command = command.parse::<ProductCommand>().ok()?;

        Some(match command {
            ProductCommand::Create => self.create(data).await,
            ProductCommand::FindAll => self.find_all(data).await,
            ProductCommand::FindOne => self.find_one(data).await,
            ProductCommand::Update => self.update(data).await,
            ProductCommand::Delete => self.remove(data).await,
        })
    }
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, RpcError> {
    serde_json::from_value(data).map_err(|e| RpcError::bad_request(e.to_string()))
}

fn encode<T: Serialize>(value: T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::unclassified(e.to_string()))
}

use business::domain::product::errors::ProductError;

use crate::rpc::error::{IntoRpcError, RpcError};

impl IntoRpcError for ProductError {
    fn into_rpc_error(self) -> RpcError {
        match self {
            // Missing products are reported as a client error, not a distinct 404.
            ProductError::NotFound { .. } => RpcError::bad_request(self.to_string()),
            ProductError::Repository(err) => RpcError::unclassified(err.to_string()),
        }
    }
}

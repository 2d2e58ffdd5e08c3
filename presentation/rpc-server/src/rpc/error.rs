use serde::Serialize;

/// Classification carried by an RPC error: an HTTP-like status code, or the
/// generic `"error"` label for failures that were not classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RpcStatus {
    Code(u16),
    Label(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RpcMessage {
    Text(String),
    List(Vec<String>),
}

/// Error envelope sent back in the `err` field of a response packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcError {
    pub status: RpcStatus,
    pub message: RpcMessage,
}

impl RpcError {
    pub const BAD_REQUEST: u16 = 400;
    pub const NO_MATCHING_HANDLER: &'static str =
        "There is no matching message handler defined in the remote service.";

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: RpcStatus::Code(Self::BAD_REQUEST),
            message: RpcMessage::Text(message.into()),
        }
    }

    pub fn validation(messages: Vec<String>) -> Self {
        Self {
            status: RpcStatus::Code(Self::BAD_REQUEST),
            message: RpcMessage::List(messages),
        }
    }

    /// Unclassified failure, reported with its own description.
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self {
            status: RpcStatus::Label("error"),
            message: RpcMessage::Text(message.into()),
        }
    }

    pub fn no_matching_handler() -> Self {
        Self::unclassified(Self::NO_MATCHING_HANDLER)
    }
}

pub trait IntoRpcError {
    fn into_rpc_error(self) -> RpcError;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_numeric_status() {
        let error = RpcError::bad_request("Product with ID #1 not found.");

        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"status": 400, "message": "Product with ID #1 not found."})
        );
    }

    #[test]
    fn should_serialize_validation_messages_as_list() {
        let error = RpcError::validation(vec!["price must not be less than 0".to_string()]);

        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({"status": 400, "message": ["price must not be less than 0"]})
        );
    }

    #[test]
    fn should_label_unclassified_errors() {
        assert_eq!(
            serde_json::to_value(RpcError::no_matching_handler()).unwrap(),
            json!({
                "status": "error",
                "message": "There is no matching message handler defined in the remote service."
            })
        );
    }
}

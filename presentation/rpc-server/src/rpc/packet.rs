use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::RpcError;

/// Request or event as sent by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundPacket {
    pub pattern: Value,
    #[serde(default)]
    pub data: Value,
    /// Absent for fire-and-forget events.
    #[serde(default)]
    pub id: Option<String>,
}

impl InboundPacket {
    /// Extracts the command name from the message pattern.
    ///
    /// Patterns arrive either as an object (`{"cmd": "..."}`), as that object
    /// serialized into a string, or as a bare command string.
    pub fn command(&self) -> Option<String> {
        match &self.pattern {
            Value::Object(map) => map.get("cmd").and_then(Value::as_str).map(str::to_string),
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => {
                    map.get("cmd").and_then(Value::as_str).map(str::to_string)
                }
                _ => Some(raw.clone()),
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundPacket {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<RpcError>,
    pub is_disposed: bool,
}

impl OutboundPacket {
    pub fn from_result(id: String, result: Result<Value, RpcError>) -> Self {
        match result {
            Ok(response) => Self {
                id,
                response: Some(response),
                err: None,
                is_disposed: true,
            },
            Err(err) => Self {
                id,
                response: None,
                err: Some(err),
                is_disposed: true,
            },
        }
    }
}

//! JSON request handling
//!
//! The boundary a network transport would call into: decode a request body,
//! evaluate its expression, and map the outcome to a status code plus an
//! encoded JSON body. The mapping switches on the error kind, never on
//! message text.
//!
//! Only `InvalidCharacter` surfaces as a client error (422); every other
//! evaluation failure collapses into a generic 500. The asymmetry is part
//! of the service's external contract.

use serde::Deserialize;
use serde_json::json;

use crate::eval::{evaluate, EvalError};

/// A calculation request as received from the transport.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcRequest {
    pub expression: String,
}

/// Status code plus encoded body, ready for a transport to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn new(status: u16, body: serde_json::Value) -> Self {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }
}

/// Handle one calculation request body.
pub fn handle(body: &str) -> ApiResponse {
    let request: CalcRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(_) => return ApiResponse::new(400, json!({"error": "Invalid request body"})),
    };

    match evaluate(&request.expression) {
        Ok(result) => ApiResponse::new(200, json!({"result": result})),
        Err(EvalError::InvalidCharacter(_)) => {
            ApiResponse::new(422, json!({"error": "Expression is not valid"}))
        }
        Err(_) => ApiResponse::new(500, json!({"error": "Internal server error"})),
    }
}

use poem_openapi::Object;
use serde::Deserialize;
use tracing::error;

#[derive(Object, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Object, Deserialize, Debug)]
pub struct BadRequestResponse {
    pub error: String,
}

impl BadRequestResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Object, Deserialize, Debug)]
pub struct NotFoundResponse {
    pub error: String,
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self {
            error: "User not found".to_string(),
        }
    }
}

#[derive(Object, Deserialize, Debug)]
pub struct InternalServerErrorResponse {
    pub error: String,
}

impl InternalServerErrorResponse {
    /// Logs the failure with its location and hides the detail from the client.
    pub fn new(module: &str, function: &str, step: &str, err: &str) -> Self {
        error!(module, function, step, "{}", err);
        Self {
            error: "Internal Server Error".to_string(),
        }
    }
}

use serde::Serialize;

pub mod message;

/// The error body shared by all failing responses.
#[derive(Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: &'static str,
}

use serde::{Deserialize, Serialize};

/// Response type for the version endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VersionResponse {
    pub version: String,
}

/// Response type for the status endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// Response type for the hello world endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response type for the personalized greeting endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GreetResponse {
    pub message: String,
    pub greeted: String,
}

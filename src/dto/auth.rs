use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bearer token claims issued by the marketplace auth service.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

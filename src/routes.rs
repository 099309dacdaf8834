// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HELLO: &str = "/hello";
pub const VERSION: &str = "/version";
pub const STATUS: &str = "/status";
pub const GREET: &str = "/greet/{name}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

use std::env;

/// Service configuration, resolved once at startup and passed explicitly
/// into server construction instead of being read ambiently.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Logical service name, used as the log prefix.
    pub service_name: String,
    /// Path prefix all cart routes are mounted under.
    pub api_prefix: String,
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, String> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port
            .parse()
            .map_err(|_| format!("PORT must be a valid number, got '{port}'"))?;
        Ok(Self {
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "Cart".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1/cart".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "Cart".to_string(),
            api_prefix: "/api/v1/cart".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

use serde::Deserialize;
use std::env;

/// Main application configuration, loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Database configuration
    pub database_url: String,
    pub db_max_connections: u32,

    // Authentication
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    // CORS
    pub cors_allowed_origins: String,

    // Object storage (optional; uploads are disabled when unset)
    pub storage: Option<StorageConfig>,

    // Service configuration
    pub service_name: String,
    pub environment: String,
}

/// S3-compatible object storage settings for attachment uploads.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let storage = match (
            env::var("STORAGE_BUCKET"),
            env::var("STORAGE_ENDPOINT"),
            env::var("STORAGE_ACCESS_KEY"),
            env::var("STORAGE_SECRET_KEY"),
        ) {
            (Ok(bucket), Ok(endpoint), Ok(access_key), Ok(secret_key)) => Some(StorageConfig {
                bucket,
                endpoint,
                region: env::var("STORAGE_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                access_key,
                secret_key,
            }),
            _ => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL")?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .unwrap_or(24),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
            storage,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "community-service".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        env::set_var("DATABASE_URL", "postgres://test");
        env::set_var("JWT_SECRET", "test-secret");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.jwt_expiry_hours, 24);
        assert_eq!(config.service_name, "community-service");
    }
}

/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. Required.
    pub database_url: String,

    /// Address the HTTP server binds to.
    /// Default: 0.0.0.0:3000
    pub bind_addr: String,

    /// Permission adapter: "database" or "allow_all".
    /// Default: database
    pub permission_adapter: String,

    /// Maximum pooled database connections.
    /// Default: 5
    pub db_max_connections: u32,

    /// Mount the `/invoke/:handler` gateway emulation route.
    /// Default: true when permission_adapter=allow_all, otherwise false. Override with INVOKE_ROUTE.
    pub invoke_route: bool,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env")?;

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let permission_adapter = std::env::var("PERMISSION_ADAPTER")
            .unwrap_or_else(|_| "database".to_string());

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a positive integer")?;

        let invoke_route = match std::env::var("INVOKE_ROUTE") {
            Ok(v) => parse_flag(&v).ok_or("INVOKE_ROUTE must be true or false")?,
            Err(_) => permission_adapter == "allow_all",
        };

        Ok(Self {
            database_url,
            bind_addr,
            permission_adapter,
            db_max_connections,
            invoke_route,
        })
    }

    /// Config for tests. Uses in-memory database URL and database-backed permissions.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            permission_adapter: "database".to_string(),
            db_max_connections: 1,
            invoke_route: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

use std::{env, str::FromStr, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// This struct holds all the parameters required to initialize and run
/// the booking server: bind address, worker count, CORS settings,
/// logging preferences, the global request quota and how the in-memory
/// store is seeded.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Path of the log file written next to the console output.
    pub log_file: String,
    /// Requests per second accepted by the global limiter.
    pub rate_limit_per_second: u32,
    /// Whether the store starts with the demo users, venues and bookings.
    pub seed_demo_data: bool,
    /// Page size of the venue catalogue when the client does not send one.
    pub default_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "development".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            num_workers: 4,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            console_logging_enabled: true,
            log_file: "venue_booking.log".to_string(),
            rate_limit_per_second: 10,
            seed_demo_data: true,
            default_page_size: 6,
        }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Every setting is optional; a missing or unparsable value keeps the
    /// default from [`Config::default`].
    ///
    /// # Environment Variables
    ///
    /// - `ENVIRONMENT`: "development" or "production" (default: "development")
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `LOG_FILE`: Log file path (default: "venue_booking.log")
    /// - `RATE_LIMIT_PER_SECOND`: Global request quota (default: 10)
    /// - `SEED_DEMO_DATA`: Load the demo fixture at start (default: true)
    /// - `DEFAULT_PAGE_SIZE`: Catalogue page size (default: 6)
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();
        Arc::new(Config {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            server_host: env::var("IP").unwrap_or(defaults.server_host),
            server_port: parse_var("PORT", defaults.server_port),
            num_workers: parse_var("WORKERS", defaults.num_workers),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            console_logging_enabled: flag_var(
                "ENABLE_CONSOLE_LOGGING",
                defaults.console_logging_enabled,
            ),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            rate_limit_per_second: parse_var(
                "RATE_LIMIT_PER_SECOND",
                defaults.rate_limit_per_second,
            ),
            seed_demo_data: flag_var("SEED_DEMO_DATA", defaults.seed_demo_data),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", defaults.default_page_size),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    parse_value(env::var(name).ok(), default)
}

fn flag_var(name: &str, default: bool) -> bool {
    flag_value(env::var(name).ok(), default)
}

fn parse_value<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn flag_value(value: Option<String>, default: bool) -> bool {
    value
        .map(|value| value.to_lowercase() == "true")
        .unwrap_or(default)
}

use tu_infra::{InfrastructureError, ZenditConfig};
use tu_shared::config::{Environment, LoggingConfig, ServerConfig};

/// Process configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub zendit: ZenditConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let environment = Environment::from_env();

        Ok(Config {
            environment,
            server: ServerConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
            zendit: ZenditConfig::from_env()?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "ENVIRONMENT",
        "ENV",
        "RUST_ENV",
        "SERVER_HOST",
        "SERVER_PORT",
        "ZENDIT_ID",
        "ZENDIT_SECRET",
        "ZENDIT_API_URL",
        "LOG_FORMAT",
    ];

    fn cleanup_test_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        cleanup_test_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.logging.level, "debug");
        assert!(config.zendit.credentials().is_incomplete());
    }

    #[test]
    #[serial]
    fn test_production_from_env() {
        cleanup_test_env();
        std::env::set_var("ENVIRONMENT", "production");
        std::env::set_var("SERVER_HOST", "0.0.0.0");
        std::env::set_var("SERVER_PORT", "3000");
        std::env::set_var("ZENDIT_ID", "live-id");
        std::env::set_var("ZENDIT_SECRET", "live-secret");

        let config = Config::from_env().unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.zendit.credentials().client_id, "live-id");

        cleanup_test_env();
    }

    #[test]
    #[serial]
    fn test_log_format_override() {
        cleanup_test_env();
        std::env::set_var("LOG_FORMAT", "json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.logging.format, tu_shared::config::LogFormat::Json);
        assert!(!config.logging.colored);
        assert_eq!(config.logging.level, "debug");

        cleanup_test_env();
    }

    #[test]
    #[serial]
    fn test_invalid_provider_url_fails() {
        cleanup_test_env();
        std::env::set_var("ZENDIT_API_URL", "::nope::");

        assert!(Config::from_env().is_err());

        cleanup_test_env();
    }
}

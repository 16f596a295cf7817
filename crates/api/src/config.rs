use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment environment, selected by `APP_ENV`.
///
/// Decides where the database lives when `DATABASE_URL` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Database used when `DATABASE_URL` is absent. Production has none.
    pub fn default_database_url(self) -> Option<&'static str> {
        match self {
            Environment::Development => Some("postgres://localhost/palette_picker"),
            Environment::Test => Some("postgres://localhost/palette_picker_test"),
            Environment::Production => None,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_ENV must be one of development, test, production (got '{0}')")]
    UnknownEnvironment(String),

    #[error("PORT must be a valid u16 (got '{0}')")]
    InvalidPort(String),

    #[error("DATABASE_URL must be set in the {0} environment")]
    MissingDatabaseUrl(Environment),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Environment the process runs in (default: `development`).
    pub environment: Environment,
    /// Postgres connection string.
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3006`).
    pub port: u16,
    /// Directory served at `/` for paths no route claims.
    pub public_dir: PathBuf,
    /// jQuery distribution directory served under `/jquery`.
    pub jquery_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                         |
    /// |----------------|---------------------------------|
    /// | `APP_ENV`      | `development`                   |
    /// | `DATABASE_URL` | per environment (see [`Environment`]) |
    /// | `HOST`         | `0.0.0.0`                       |
    /// | `PORT`         | `3006`                          |
    /// | `PUBLIC_DIR`   | `public`                        |
    /// | `JQUERY_DIR`   | `node_modules/jquery/dist`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: Environment = match lookup("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => Environment::Development,
        };

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => environment
                .default_database_url()
                .map(str::to_string)
                .ok_or(ConfigError::MissingDatabaseUrl(environment))?,
        };

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3006,
        };

        let public_dir = lookup("PUBLIC_DIR")
            .unwrap_or_else(|| "public".into())
            .into();
        let jquery_dir = lookup("JQUERY_DIR")
            .unwrap_or_else(|| "node_modules/jquery/dist".into())
            .into();

        Ok(Self {
            environment,
            database_url,
            host,
            port,
            public_dir,
            jquery_dir,
        })
    }
}

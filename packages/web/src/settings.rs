use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};

use api::SessionConfig;

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    /// Accepts `8080` as well as the listen-address form `:8080`.
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
}

impl Server {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub url: String,
    /// Maximum number of pooled connections.
    pub pool: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://notes.db".into(),
            pool: 5,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub session: SessionConfig,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then the environment
    /// (`SERVER_PORT`, `DATABASE_URL`, `SESSION_EXPIRY`, ...).
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder(Environment::default().separator("_"))?
            .build()?
            .try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Ok(Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.pool", i64::from(defaults.database.pool))?
            .set_default("session.expiry", defaults.session.expiry)?
            .set_default("session.secure", defaults.session.secure)?
            .set_default("session.cleanup", defaults.session.cleanup as i64)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment))
    }
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(text) => text
            .trim()
            .trim_start_matches(':')
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port: {text:?}"))),
    }
}

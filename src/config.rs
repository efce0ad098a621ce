use crate::error::{BadEnvVarSnafu, ParsePortSnafu, RosterResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::sync::Arc;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_SERVER_IP: &str = "0.0.0.0:80";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Self::from_lookup(var)
    }

    /// Builds the configuration from any variable source, so tests don't need to touch the process environment.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> RosterResult<Self> {
        let server_ip = lookup("ROSTER_SERVER_IP").unwrap_or_else(|_| DEFAULT_SERVER_IP.to_string());

        Ok(Self {
            db_config: Arc::new(DbConfig::from_lookup(lookup)?),
            server_ip,
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct DbConfig {
    user: String,
    password: SecretString,
    host: String,
    port: u16,
    database: String,
}

impl DbConfig {
    fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> RosterResult<Self> {
        let get_env_var = |name| lookup(name).context(BadEnvVarSnafu { name });

        let port = match lookup("POSTGRES_PORT") {
            Ok(original) => original.parse().context(ParsePortSnafu { original })?,
            Err(_) => DEFAULT_DB_PORT,
        };

        Ok(Self {
            user: get_env_var("POSTGRES_USER")?,
            password: SecretString::from(get_env_var("POSTGRES_PASSWORD")?),
            host: get_env_var("POSTGRES_HOST")?,
            port,
            database: get_env_var("POSTGRES_DB")?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

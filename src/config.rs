use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 8080;
pub const PORT_VAR: &str = "PORT";

/// Listener settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads `PORT` from the process environment (after `.env` has been
    /// loaded). Unset or empty means [`DEFAULT_PORT`].
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(PORT_VAR).filter(|v| !v.is_empty()) {
            config.port = match value.trim().parse() {
                Ok(port) => port,
                Err(source) => return Err(ServerError::InvalidPort { value, source }),
            };
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

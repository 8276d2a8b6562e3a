#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    #[serde(default = "Configuration::default_presidio_ip")]
    pub presidio_ip: String,
    #[serde(default = "Configuration::default_presidio_port")]
    pub presidio_port: u16,
}

impl Configuration {
    fn default_presidio_ip() -> String {
        "localhost".into()
    }

    fn default_presidio_port() -> u16 {
        8080
    }

    /// Loads the toml file at `path` when it exists, then the environment on top of it.
    pub fn from_path(path: &str) -> Result<Self, config::ConfigError> {
        tracing::debug!("loading configuration from {}", path);
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn client(&self) -> presctl_client::Config {
        presctl_client::Config {
            host: self.presidio_ip.clone(),
            port: self.presidio_port,
        }
    }
}

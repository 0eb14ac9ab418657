use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvopilotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Policy error: {0}")]
    Policy(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EvopilotError>;

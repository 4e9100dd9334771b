use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delimiter must be a single ASCII character, got `{0}`")]
    NonAsciiDelimiter(char),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

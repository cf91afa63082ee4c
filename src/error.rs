// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_converts_and_displays() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing page").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(format!("{}", err), "I/O Error: missing page");
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(format!("{}", err).starts_with("Config Error:"));
    }

    #[test]
    fn decode_error_maps_to_decode() {
        let decode = image_rs::load_from_memory(b"definitely not an image").unwrap_err();
        let err: Error = decode.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}

use std::{fmt::Display, io};

use glob::{GlobError, PatternError};

#[derive(Debug)]
pub enum Error {
    Deserialize(toml::de::Error),
    Glob(GlobError),
    InvalidPost(String, Box<Error>),
    Io(io::Error),
    Markdown(String),
    NotFound(String),
    Notify(notify::Error),
    Pattern(PatternError),
    Render(handlebars::RenderError),
    Template(handlebars::TemplateError),
    Toml(toml::de::Error),
    Yaml(serde_yaml::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(slug) => write!(f, "post not found: {}", slug),
            Error::InvalidPost(slug, cause) => write!(f, "invalid post {}: {}", slug, cause),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

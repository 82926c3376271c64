use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    Http(reqwest::Error),
    UnexpectedStatus { status: u16, endpoint: String },
    Serialization(String),
    Deserialization(String),
    Persistence(String),
    NotFound(String),
    NotLoggedIn,
    MutationInFlight(&'static str),
    Configuration(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "HTTP error: {}", err),
            ClientError::UnexpectedStatus { status, endpoint } => {
                write!(f, "Unexpected status {} from {}", status, endpoint)
            }
            ClientError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ClientError::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            ClientError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            ClientError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ClientError::NotLoggedIn => write!(f, "Not logged in"),
            ClientError::MutationInFlight(action) => {
                write!(f, "Mutation already in flight: {}", action)
            }
            ClientError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Deserialization(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

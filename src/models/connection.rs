use serde::{Deserialize, Serialize};

/// Another member of the platform, either an existing connection or a
/// recommended candidate. The name doubles as the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Connection {
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
}

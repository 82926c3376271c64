use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RatedTag {
    pub name: String,
    pub percentage: u8,
}

/// The logged-in user's own profile, as persisted by the session store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub skills: Vec<RatedTag>,
    pub interests: Vec<RatedTag>,
    pub about: String,
    pub region: String,
    pub age: u32,
    pub gender: String,
}

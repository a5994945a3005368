use serde::{Deserialize, Serialize};

/// iTerm2's "run a custom command" flag. Generated profiles always set it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum CustomCommand {
    #[default]
    Yes,
}

/// One iTerm2 dynamic profile.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Guid")]
    pub guid: String,

    #[serde(rename = "Dynamic Profile Parent Name")]
    pub parent_profile_name: String,

    #[serde(rename = "Custom Command")]
    pub custom_command: CustomCommand,

    #[serde(rename = "Command")]
    pub command: String,

    #[serde(rename = "Tags")]
    pub tags: Vec<String>,
}

/// Top-level object of a dynamic profiles file: `{"Profiles": [...]}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileDocument {
    #[serde(rename = "Profiles")]
    pub profiles: Vec<ProfileRecord>,
}

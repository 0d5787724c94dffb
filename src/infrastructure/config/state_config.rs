use serde::{Deserialize, Serialize};

/// Settings-screen toggles, remembered between runs.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    #[serde(default = "default_true")]
    pub notifications: bool,

    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default)]
    pub location: bool,

    #[serde(default = "default_true")]
    pub biometrics: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            location: false,
            biometrics: true,
        }
    }
}

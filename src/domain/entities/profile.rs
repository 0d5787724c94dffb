//! Agent profile as held by the candidate API.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::FormError;

pub const DEFAULT_FULL_NAME: &str = "John Doe";
pub const DEFAULT_EMAIL: &str = "john.doe@example.com";
pub const DEFAULT_MOBILE: &str = "+1 (555) 123-4567";
pub const DEFAULT_ROLE: &str = "Unknown Role";
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Availability shown next to the agent's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfileStatus {
    #[default]
    Available,
    Busy,
    Away,
    #[serde(rename = "Do Not Disturb")]
    DoNotDisturb,
    Offline,
}

impl ProfileStatus {
    pub const ALL: [Self; 5] = [
        Self::Available,
        Self::Busy,
        Self::Away,
        Self::DoNotDisturb,
        Self::Offline,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Away => "Away",
            Self::DoNotDisturb => "Do Not Disturb",
            Self::Offline => "Offline",
        }
    }

    /// Parses a status label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label))
    }

    /// Next status in the picker, wrapping around.
    #[must_use]
    pub fn cycle(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The signed-in agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    id: String,
    full_name: String,
    email: String,
    mobile: String,
    status: ProfileStatus,
    avatar_url: String,
    role: String,
}

impl UserProfile {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
        status: ProfileStatus,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            mobile: mobile.into(),
            status,
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            role: role.into(),
        }
    }

    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    #[must_use]
    pub const fn status(&self) -> ProfileStatus {
        self.status
    }

    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Profile with the edited fields applied.
    #[must_use]
    pub fn with_update(&self, update: &ProfileUpdate) -> Self {
        Self {
            full_name: update.full_name.clone(),
            email: update.email.clone(),
            mobile: update.mobile.clone(),
            status: update.status,
            ..self.clone()
        }
    }

    /// Editable copy of this profile's fields.
    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            status: self.status,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(
            "",
            DEFAULT_FULL_NAME,
            DEFAULT_EMAIL,
            DEFAULT_MOBILE,
            ProfileStatus::Available,
            DEFAULT_ROLE,
        )
    }
}

/// Fields the agent may change from the profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub status: ProfileStatus,
}

impl ProfileUpdate {
    /// Checks required fields in display order.
    ///
    /// # Errors
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.full_name.trim().is_empty() {
            return Err(FormError::MissingFullName);
        }
        if self.email.trim().is_empty() || !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if self.mobile.trim().is_empty() {
            return Err(FormError::MissingMobile);
        }
        Ok(())
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

//! Directory contact record.

use serde::{Deserialize, Serialize};

/// A person the agent can call. Read-only display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    pub company: String,
    pub designation: String,
    pub email: String,
    pub address: String,
}

impl ContactRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        company: impl Into<String>,
        designation: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            company: company.into(),
            designation: designation.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// "Manager at ABC Corp".
    #[must_use]
    pub fn title_line(&self) -> String {
        format!("{} at {}", self.designation, self.company)
    }

    /// Phone number with formatting stripped, keeping digits and `+`.
    #[must_use]
    pub fn dialable_number(&self) -> String {
        self.phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }

    /// `tel:` URI handed to the system dialer.
    #[must_use]
    pub fn dial_uri(&self) -> String {
        format!("tel:{}", self.dialable_number())
    }

    /// `mailto:` URI handed to the mail client.
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Up to two upper-case initials taken from the name.
    #[must_use]
    pub fn initials(&self) -> String {
        initials_of(&self.name)
    }
}

/// Initials for an avatar badge: the first letter of the first two words.
#[must_use]
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> ContactRecord {
        ContactRecord::new(
            "John Doe",
            "+1 (555) 123-4567",
            "ABC Corp",
            "Manager",
            "john.doe@abccorp.com",
            "123 Business St, City, State 12345",
        )
    }

    #[test]
    fn test_dial_uri_strips_formatting() {
        assert_eq!(john().dial_uri(), "tel:+15551234567");
    }

    #[test]
    fn test_mailto_uri() {
        assert_eq!(john().mailto_uri(), "mailto:john.doe@abccorp.com");
    }

    #[test]
    fn test_title_line() {
        assert_eq!(john().title_line(), "Manager at ABC Corp");
    }

    #[test]
    fn test_initials() {
        assert_eq!(john().initials(), "JD");
        assert_eq!(initials_of("mary ann van dyke"), "MA");
        assert_eq!(initials_of("Cher"), "C");
        assert_eq!(initials_of(""), "");
    }
}

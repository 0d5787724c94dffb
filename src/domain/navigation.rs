//! Screens of the shell and drawer targets.

use std::fmt;

/// Screen currently shown by the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    SignIn,
    #[default]
    Dashboard,
    Calls,
    Contacts,
    Notifications,
    Profile,
    Settings,
    Help,
}

impl Screen {
    pub const ALL: [Self; 8] = [
        Self::SignIn,
        Self::Dashboard,
        Self::Calls,
        Self::Contacts,
        Self::Notifications,
        Self::Profile,
        Self::Settings,
        Self::Help,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Dashboard => "Dashboard",
            Self::Calls => "Calls",
            Self::Contacts => "Contacts",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Help => "Help & Support",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::Dashboard => "dashboard",
            Self::Calls => "calls",
            Self::Contacts => "contacts",
            Self::Notifications => "notifications",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Help => "help",
        }
    }

    /// Parses a screen name, falling back to [`Screen::Dashboard`] for
    /// anything unrecognised.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|screen| screen.slug() == normalized)
            .unwrap_or_else(|| {
                tracing::debug!(name, "Unknown screen name, using dashboard");
                Self::Dashboard
            })
    }

    /// Whether the screen needs an authenticated agent.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::SignIn)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// What a drawer entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Screen(Screen),
    Logout,
}

impl NavTarget {
    /// Drawer entries in display order.
    pub const DRAWER: [Self; 8] = [
        Self::Screen(Screen::Dashboard),
        Self::Screen(Screen::Calls),
        Self::Screen(Screen::Contacts),
        Self::Screen(Screen::Notifications),
        Self::Screen(Screen::Profile),
        Self::Screen(Screen::Settings),
        Self::Screen(Screen::Help),
        Self::Logout,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Screen(screen) => screen.title(),
            Self::Logout => "Logout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("dashboard", Screen::Dashboard)]
    #[test_case("Calls", Screen::Calls)]
    #[test_case(" contacts ", Screen::Contacts)]
    #[test_case("sign-in", Screen::SignIn)]
    #[test_case("SIGN_IN", Screen::SignIn)]
    #[test_case("help", Screen::Help)]
    fn test_parse_known_screens(input: &str, expected: Screen) {
        assert_eq!(Screen::parse_or_default(input), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("analytics" ; "unknown")]
    #[test_case("calendar" ; "removed screen")]
    fn test_parse_unknown_falls_back_to_dashboard(input: &str) {
        assert_eq!(Screen::parse_or_default(input), Screen::Dashboard);
    }

    #[test]
    fn test_drawer_ends_with_logout() {
        assert_eq!(NavTarget::DRAWER.last(), Some(&NavTarget::Logout));
        assert!(
            !NavTarget::DRAWER.contains(&NavTarget::Screen(Screen::SignIn)),
            "sign-in is never a drawer destination"
        );
    }

    #[test]
    fn test_only_sign_in_is_public() {
        for screen in Screen::ALL {
            assert_eq!(screen.requires_auth(), screen != Screen::SignIn);
        }
    }
}

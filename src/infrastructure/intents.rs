//! Hands `tel:`, `mailto:` and web URIs to the operating system.

use tracing::{debug, warn};

use crate::domain::ports::DeviceIntentPort;

/// Opens URIs with the desktop's registered handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIntents;

impl SystemIntents {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn launch(uri: &str, allowed: &[&str]) -> bool {
        let lower = uri.to_ascii_lowercase();
        if !allowed.iter().any(|scheme| lower.starts_with(scheme)) {
            warn!(uri, "Refusing to open URI with unexpected scheme");
            return false;
        }

        match opener::open(uri) {
            Ok(()) => {
                debug!(uri, "Handed URI to the system");
                true
            }
            Err(e) => {
                warn!(uri, error = %e, "No handler accepted URI");
                false
            }
        }
    }
}

impl DeviceIntentPort for SystemIntents {
    fn dial(&self, tel_uri: &str) -> bool {
        Self::launch(tel_uri, &["tel:"])
    }

    fn compose_email(&self, mailto_uri: &str) -> bool {
        Self::launch(mailto_uri, &["mailto:"])
    }

    fn open_url(&self, url: &str) -> bool {
        Self::launch(url, &["https://", "http://"])
    }
}

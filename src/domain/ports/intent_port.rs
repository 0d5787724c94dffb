//! Device intent port definition.

/// Hands URIs to the operating system. Fire-and-forget: a `false` return
/// only means the hand-off itself failed.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceIntentPort: Send + Sync {
    /// Opens the dialer for a `tel:` URI.
    fn dial(&self, tel_uri: &str) -> bool;

    /// Opens the mail client for a `mailto:` URI.
    fn compose_email(&self, mailto_uri: &str) -> bool;

    /// Opens a web address.
    fn open_url(&self, url: &str) -> bool;
}

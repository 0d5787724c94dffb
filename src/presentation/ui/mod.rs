//! UI screens.

mod alert_popup;
mod app;
mod backend;
mod call_form_view;
mod calling_screen;
mod contacts_screen;
mod dashboard_screen;
mod help_screen;
mod login_screen;
mod main_screen;
mod notifications_screen;
mod outcome;
mod profile_screen;
mod settings_screen;

pub use alert_popup::AlertPopup;
pub use app::{App, AppDependencies, AppOptions};
pub use backend::{Action, Backend, BackendCommand, ProfileRequester};
pub use call_form_view::{CallFormView, FormOutcome};
pub use calling_screen::CallingScreen;
pub use contacts_screen::ContactsScreen;
pub use dashboard_screen::{DashboardOverlay, DashboardScreen};
pub use help_screen::HelpScreen;
pub use login_screen::{LoginAction, LoginScreen, LoginState};
pub use main_screen::{MainShell, ShellOutcome, ShellServices};
pub use notifications_screen::NotificationsScreen;
pub use outcome::ViewOutcome;
pub use profile_screen::{ProfileScreen, ProfileSync};
pub use settings_screen::SettingsScreen;

//! Navigation shell shown after sign-in.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::alert_popup::AlertPopup;
use super::backend::{Action as BackendAction, BackendCommand, ProfileRequester};
use super::calling_screen::CallingScreen;
use super::contacts_screen::ContactsScreen;
use super::dashboard_screen::DashboardScreen;
use super::help_screen::HelpScreen;
use super::notifications_screen::NotificationsScreen;
use super::outcome::ViewOutcome;
use super::profile_screen::ProfileScreen;
use super::settings_screen::SettingsScreen;
use crate::application::services::{AlertQueue, NotificationCenter, SessionLog};
use crate::domain::entities::UserProfile;
use crate::domain::errors::ApiError;
use crate::domain::keybinding::{Action, KeyScope};
use crate::domain::navigation::{NavTarget, Screen};
use crate::domain::ports::{DeviceIntentPort, DirectoryPort};
use crate::domain::{AlertLevel, SessionEvent};
use crate::infrastructure::SettingsState;
use crate::infrastructure::inbox::seeded_notifications;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    Dialog, DialogIntent, DialogResult, Drawer, DrawerAction, DrawerState, FooterBar,
    FooterBarStyle, HeaderBar, HeaderBarStyle, StatusBar, StatusLevel, drawer_initials,
    scope_label,
};

const DIAL_FAILED: &str = "Unable to open dialer. Please check if your device supports phone calls.";
const EMAIL_FAILED: &str = "Unable to open email client. Please check if one is configured.";
const URL_FAILED: &str = "Unable to open the website.";
const DRAWER_LOAD_FAILED: &str = "Failed to load user data. Please try again.";

/// What the shell needs from the application around it.
#[derive(Debug)]
pub enum ShellOutcome {
    None,
    Quit,
    SignOut,
    Backend(BackendCommand),
    SettingsChanged(SettingsState),
}

/// Everything the shell borrows from the app for its whole life.
pub struct ShellServices {
    pub directory: Arc<dyn DirectoryPort>,
    pub intents: Arc<dyn DeviceIntentPort>,
    pub session_tx: mpsc::UnboundedSender<SessionEvent>,
    pub theme: Theme,
    pub alert_duration: Duration,
}

enum View {
    Dashboard(DashboardScreen),
    Calls(Box<CallingScreen>),
    Contacts(ContactsScreen),
    Notifications(NotificationsScreen),
    Profile(ProfileScreen),
    Settings(SettingsScreen),
    Help(HelpScreen),
}

pub struct MainShell {
    screen: Screen,
    view: View,
    drawer: DrawerState,
    drawer_ticket: Option<u64>,
    profile_ticket: Option<u64>,
    save_ticket: Option<u64>,
    next_ticket: u64,
    dialog: Option<Dialog>,
    alerts: AlertQueue,
    notifications: NotificationCenter,
    session_log: SessionLog,
    profile: UserProfile,
    settings: SettingsState,
    registry: CommandRegistry,
    services: ShellServices,
}

impl MainShell {
    #[must_use]
    pub fn new(services: ShellServices, profile: UserProfile, settings: SettingsState) -> Self {
        Self {
            screen: Screen::Dashboard,
            view: View::Dashboard(DashboardScreen::new()),
            drawer: DrawerState::new(),
            drawer_ticket: None,
            profile_ticket: None,
            save_ticket: None,
            next_ticket: 0,
            dialog: None,
            alerts: AlertQueue::new(services.alert_duration),
            notifications: NotificationCenter::new(seeded_notifications()),
            session_log: SessionLog::new(),
            profile,
            settings,
            registry: CommandRegistry::new(),
            services,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub const fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    #[must_use]
    pub const fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    #[must_use]
    pub const fn session_log(&self) -> &SessionLog {
        &self.session_log
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    #[must_use]
    pub const fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    /// The calling view, while it is the active screen.
    #[must_use]
    pub fn calling(&self) -> Option<&CallingScreen> {
        match &self.view {
            View::Calls(calling) => Some(calling),
            _ => None,
        }
    }

    pub fn tick(&mut self) {
        self.alerts.tick();
    }

    /// Shows a message raised outside the shell, such as a failed settings save.
    pub fn alert(&mut self, level: AlertLevel, title: &str, message: &str) {
        self.alerts.push(level, title, message);
    }

    /// Timer events only matter to the calling view that scheduled them.
    pub fn handle_session_event(&mut self, event: SessionEvent) -> bool {
        match &mut self.view {
            View::Calls(calling) => calling.handle_session_event(event),
            _ => {
                debug!(?event, "Session event with no calling view open");
                false
            }
        }
    }

    fn ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn scope(&self) -> KeyScope {
        match &self.view {
            View::Dashboard(v) => v.scope(),
            View::Calls(v) => v.scope(),
            View::Contacts(v) => v.scope(),
            View::Notifications(v) => v.scope(),
            View::Profile(v) => v.scope(),
            View::Settings(v) => v.scope(),
            View::Help(v) => v.scope(),
        }
    }

    fn captures_text(&self) -> bool {
        match &self.view {
            View::Calls(v) => v.captures_text(),
            View::Contacts(v) => v.captures_text(),
            View::Profile(v) => v.captures_text(),
            _ => false,
        }
    }

    /// Switches the active screen. Leaving a screen drops its view, which
    /// cancels call timers and orphans outstanding profile requests.
    pub fn navigate(&mut self, screen: Screen) -> ShellOutcome {
        if screen == Screen::SignIn {
            return ShellOutcome::SignOut;
        }
        if screen == self.screen {
            return ShellOutcome::None;
        }
        info!(from = %self.screen, to = %screen, "Navigating");

        let theme = self.services.theme;
        self.profile_ticket = None;
        self.save_ticket = None;
        self.screen = screen;

        let mut outcome = ShellOutcome::None;
        self.view = match screen {
            Screen::Dashboard | Screen::SignIn => View::Dashboard(DashboardScreen::new()),
            Screen::Calls => View::Calls(Box::new(CallingScreen::new(
                self.services.directory.clone(),
                self.services.session_tx.clone(),
                theme,
            ))),
            Screen::Contacts => View::Contacts(ContactsScreen::new(
                self.services.directory.contacts().to_vec(),
                &theme,
            )),
            Screen::Notifications => View::Notifications(NotificationsScreen::new()),
            Screen::Profile => {
                let mut view = ProfileScreen::new(&theme);
                view.begin_load();
                outcome = self.fetch_profile(ProfileRequester::ProfileScreen);
                View::Profile(view)
            }
            Screen::Settings => View::Settings(SettingsScreen::new()),
            Screen::Help => View::Help(HelpScreen::new()),
        };
        outcome
    }

    fn fetch_profile(&mut self, requester: ProfileRequester) -> ShellOutcome {
        let ticket = self.ticket();
        match requester {
            ProfileRequester::Drawer => self.drawer_ticket = Some(ticket),
            ProfileRequester::ProfileScreen => self.profile_ticket = Some(ticket),
        }
        ShellOutcome::Backend(BackendCommand::FetchProfile { requester, ticket })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ShellOutcome {
        if self.dialog.is_some() {
            return self.handle_dialog_key(key);
        }
        if self.drawer.is_open() {
            return self.handle_drawer_key(key);
        }

        if self.captures_text() {
            let outcome = match &mut self.view {
                View::Calls(v) => v.handle_text_key(key),
                View::Contacts(v) => v.handle_text_key(key),
                View::Profile(v) => v.handle_text_key(key, &self.profile),
                _ => ViewOutcome::Ignored,
            };
            return self.apply(outcome);
        }

        let Some(action) = self.registry.find_action(self.scope(), key) else {
            return ShellOutcome::None;
        };
        debug!(?action, scope = ?self.scope(), "Resolved key");

        match action {
            Action::Quit => return ShellOutcome::Quit,
            Action::Logout => return ShellOutcome::SignOut,
            Action::ToggleDrawer => {
                self.drawer.open(self.screen);
                return self.fetch_profile(ProfileRequester::Drawer);
            }
            Action::ToggleHelp => {
                let target = if self.screen == Screen::Help {
                    Screen::Dashboard
                } else {
                    Screen::Help
                };
                return self.navigate(target);
            }
            Action::Cancel if self.alerts.has_alerts() => {
                self.alerts.dismiss();
                return ShellOutcome::None;
            }
            _ => {}
        }

        let outcome = match &mut self.view {
            View::Dashboard(v) => v.handle_action(action),
            View::Calls(v) => v.handle_action(action),
            View::Contacts(v) => v.handle_action(action),
            View::Notifications(v) => v.handle_action(action, &mut self.notifications),
            View::Profile(v) => v.handle_action(action, &self.profile),
            View::Settings(v) => v.handle_action(action, &self.settings),
            View::Help(v) => v.handle_action(action),
        };

        if outcome == ViewOutcome::Ignored && action == Action::Cancel {
            return self.navigate(Screen::Dashboard);
        }
        self.apply(outcome)
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> ShellOutcome {
        let Some(action) = self.registry.find_action(KeyScope::Global, key) else {
            return ShellOutcome::None;
        };
        let Some(dialog) = self.dialog.as_mut() else {
            return ShellOutcome::None;
        };
        match dialog.handle_action(action) {
            DialogResult::Pending => ShellOutcome::None,
            DialogResult::Closed(intent) => {
                self.dialog = None;
                intent.map_or(ShellOutcome::None, |intent| self.apply_intent(intent))
            }
        }
    }

    fn handle_drawer_key(&mut self, key: KeyEvent) -> ShellOutcome {
        let Some(action) = self.registry.find_action(KeyScope::Global, key) else {
            return ShellOutcome::None;
        };
        if action == Action::Quit {
            return ShellOutcome::Quit;
        }
        match self.drawer.handle_action(action) {
            None => ShellOutcome::None,
            Some(DrawerAction::Close) => {
                self.close_drawer();
                ShellOutcome::None
            }
            Some(DrawerAction::Navigate(NavTarget::Screen(screen))) => {
                self.close_drawer();
                self.navigate(screen)
            }
            Some(DrawerAction::Navigate(NavTarget::Logout)) => {
                self.close_drawer();
                ShellOutcome::SignOut
            }
        }
    }

    fn close_drawer(&mut self) {
        self.drawer.close();
        self.drawer_ticket = None;
    }

    fn apply_intent(&mut self, intent: DialogIntent) -> ShellOutcome {
        debug!(?intent, "Dialog confirmed");
        match intent {
            DialogIntent::RestartQueue => {
                if let View::Calls(calling) = &mut self.view {
                    calling.restart();
                }
            }
            DialogIntent::CloseCalling => return self.navigate(Screen::Dashboard),
            DialogIntent::MarkNotificationRead(id) => {
                self.notifications.mark_read(&id);
            }
            DialogIntent::DeleteNotification(id) => {
                self.notifications.delete(&id);
            }
            DialogIntent::ClearNotifications => self.notifications.clear_all(),
            DialogIntent::SignOut => return ShellOutcome::SignOut,
        }
        if let View::Notifications(view) = &mut self.view {
            view.clamp(&self.notifications);
        }
        ShellOutcome::None
    }

    fn apply(&mut self, outcome: ViewOutcome) -> ShellOutcome {
        match outcome {
            ViewOutcome::Ignored | ViewOutcome::Handled => {}
            ViewOutcome::Navigate(screen) => return self.navigate(screen),
            ViewOutcome::Alert {
                level,
                title,
                message,
            } => self.alerts.push(level, title, message),
            ViewOutcome::Dialog(dialog) => self.dialog = Some(dialog),
            ViewOutcome::Dial(uri) => {
                if !self.services.intents.dial(&uri) {
                    self.alerts.error("Error", DIAL_FAILED);
                }
            }
            ViewOutcome::Email(uri) => {
                if !self.services.intents.compose_email(&uri) {
                    self.alerts.error("Error", EMAIL_FAILED);
                }
            }
            ViewOutcome::OpenUrl(url) => {
                if !self.services.intents.open_url(&url) {
                    self.alerts.error("Error", URL_FAILED);
                }
            }
            ViewOutcome::FetchProfile => {
                return self.fetch_profile(ProfileRequester::ProfileScreen);
            }
            ViewOutcome::SaveProfile { current, update } => {
                let ticket = self.ticket();
                self.save_ticket = Some(ticket);
                return ShellOutcome::Backend(BackendCommand::UpdateProfile {
                    ticket,
                    current,
                    update,
                });
            }
            ViewOutcome::CallSubmitted {
                contact,
                call_secs,
                record,
            } => {
                info!(contact = %contact, call_secs, connected = record.is_connected(), "Call logged");
                self.session_log.record(contact, call_secs, record);
                self.alerts.success("Success", "Call details saved successfully!");
                return self.navigate(Screen::Dashboard);
            }
            ViewOutcome::SettingsChanged(settings) => {
                self.settings = settings.clone();
                return ShellOutcome::SettingsChanged(settings);
            }
        }
        ShellOutcome::None
    }

    /// Applies a backend reply, dropping it if its view has moved on.
    pub fn handle_backend(&mut self, action: BackendAction) {
        match action {
            BackendAction::ProfileLoaded {
                requester: ProfileRequester::Drawer,
                ticket,
                result,
            } => {
                if self.drawer_ticket != Some(ticket) {
                    debug!(ticket, "Discarding stale drawer profile");
                    return;
                }
                self.drawer_ticket = None;
                match result {
                    Ok(profile) => {
                        self.drawer.set_profile(&profile);
                        self.profile = profile;
                    }
                    Err(ApiError::NoTokenAvailable) => {
                        warn!("Drawer opened without a stored token");
                        self.drawer.set_profile(&self.profile);
                        self.alerts
                            .error("Error", ApiError::NoTokenAvailable.to_string());
                    }
                    Err(e) => {
                        warn!(error = %e, "Drawer could not load the agent");
                        self.drawer.set_unknown();
                        self.alerts.error("Error", DRAWER_LOAD_FAILED);
                    }
                }
            }
            BackendAction::ProfileLoaded {
                requester: ProfileRequester::ProfileScreen,
                ticket,
                result,
            } => {
                if self.profile_ticket != Some(ticket) {
                    debug!(ticket, "Discarding stale profile");
                    return;
                }
                self.profile_ticket = None;
                if let View::Profile(view) = &mut self.view {
                    view.loaded();
                }
                match result {
                    Ok(profile) => self.profile = profile,
                    Err(e) => self.alerts.error("Error", e.to_string()),
                }
            }
            BackendAction::ProfileSaved { ticket, result } => {
                let current = self.save_ticket == Some(ticket);
                if current {
                    self.save_ticket = None;
                }
                match result {
                    Ok(profile) => {
                        self.profile = profile;
                        if !current {
                            debug!(ticket, "Profile saved after its view closed");
                            return;
                        }
                        if let View::Profile(view) = &mut self.view {
                            view.saved();
                        }
                        self.alerts.success("Success", "Profile updated successfully");
                    }
                    Err(e) => {
                        if !current {
                            return;
                        }
                        if let View::Profile(view) = &mut self.view {
                            view.save_failed();
                        }
                        self.alerts.error("Error", e.user_message());
                    }
                }
            }
        }
    }

    fn status_bar(&self) -> StatusBar {
        match &self.view {
            View::Calls(calling) => {
                let session = calling.driver().session();
                StatusBar::new()
                    .left(calling.queue().position_label())
                    .center(session.status().label())
                    .right(session.formatted_elapsed())
                    .level(if session.is_active() {
                        StatusLevel::Success
                    } else {
                        StatusLevel::Info
                    })
            }
            _ => {
                let logged = self.session_log.len();
                StatusBar::new()
                    .left(format!("Signed in as {}", self.profile.full_name()))
                    .right(format!("{logged} call(s) logged this session"))
                    .level(
                        self.alerts
                            .current()
                            .map_or(StatusLevel::Info, |alert| alert.level.into()),
                    )
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let theme = self.services.theme;
        let [header_area, body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let initials = drawer_initials(self.profile.full_name());
        HeaderBar::new(crate::NAME, crate::VERSION, self.screen.title())
            .agent(&initials, self.profile.status())
            .unread(self.notifications.unread_count())
            .style(HeaderBarStyle::from_theme(&theme))
            .render(header_area, buf);

        match &self.view {
            View::Dashboard(v) => {
                v.render(body_area, buf, &theme, self.profile.full_name(), &self.session_log);
            }
            View::Calls(v) => v.render(body_area, buf),
            View::Contacts(v) => v.render(body_area, buf, &theme),
            View::Notifications(v) => v.render(body_area, buf, &theme, &self.notifications),
            View::Profile(v) => v.render(body_area, buf, &theme, &self.profile),
            View::Settings(v) => v.render(body_area, buf, &theme, &self.settings),
            View::Help(v) => v.render(body_area, buf, &theme),
        }

        (&self.status_bar()).render(status_area, buf);

        let scope = if self.drawer.is_open() || self.dialog.is_some() {
            KeyScope::Global
        } else {
            self.scope()
        };
        let binds = self.registry.bar(scope);
        FooterBar::new(&binds)
            .scope(scope_label(scope))
            .style(FooterBarStyle::from_theme(&theme))
            .render(footer_area, buf);

        if self.drawer.is_open() {
            Drawer::new(&theme).render(body_area, buf, &mut self.drawer);
        }
        if let Some(dialog) = &self.dialog {
            dialog.render(body_area, buf, &theme);
        }
        if let Some(alert) = self.alerts.current() {
            AlertPopup::new(alert, &theme).render(body_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::domain::errors::SyncError;
    use crate::domain::ports::mocks::MockDeviceIntentPort;
    use crate::infrastructure::StaticDirectory;
    use crate::presentation::widgets::DrawerIdentity;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shell_with(intents: MockDeviceIntentPort) -> (MainShell, mpsc::UnboundedReceiver<SessionEvent>) {
        let (session_tx, session_rx) = mpsc::unbounded_channel();
        let services = ShellServices {
            directory: Arc::new(StaticDirectory::demo()),
            intents: Arc::new(intents),
            session_tx,
            theme: Theme::default(),
            alert_duration: Duration::from_secs(3),
        };
        (
            MainShell::new(services, UserProfile::default(), SettingsState::default()),
            session_rx,
        )
    }

    fn shell() -> (MainShell, mpsc::UnboundedReceiver<SessionEvent>) {
        shell_with(MockDeviceIntentPort::new())
    }

    fn fetch_ticket(outcome: ShellOutcome) -> u64 {
        match outcome {
            ShellOutcome::Backend(BackendCommand::FetchProfile { ticket, .. }) => ticket,
            other => panic!("expected profile fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_drawer_open_fetches_and_navigates() {
        let (mut shell, _rx) = shell();
        let ticket = fetch_ticket(shell.handle_key(key(KeyCode::Char('m'))));
        assert!(shell.drawer().is_open());

        shell.handle_backend(BackendAction::ProfileLoaded {
            requester: ProfileRequester::Drawer,
            ticket,
            result: Err(ApiError::http(500, "boom")),
        });
        assert_eq!(
            shell.alerts().current().map(|a| a.message.as_str()),
            Some(DRAWER_LOAD_FAILED)
        );

        shell.handle_key(key(KeyCode::Down));
        shell.handle_key(key(KeyCode::Down));
        shell.handle_key(key(KeyCode::Enter));
        assert!(!shell.drawer().is_open());
        assert_eq!(shell.screen(), Screen::Contacts);
    }

    #[test]
    fn test_drawer_without_token_reports_session_expired() {
        let (mut shell, _rx) = shell();
        let ticket = fetch_ticket(shell.handle_key(key(KeyCode::Char('m'))));

        shell.handle_backend(BackendAction::ProfileLoaded {
            requester: ProfileRequester::Drawer,
            ticket,
            result: Err(ApiError::NoTokenAvailable),
        });

        assert_eq!(
            shell.alerts().current().map(|a| a.message.as_str()),
            Some("Session expired. Please login again.")
        );
        assert_eq!(
            shell.drawer().identity(),
            &DrawerIdentity::Known {
                name: shell.profile().full_name().to_string(),
                role: shell.profile().role().to_string(),
            }
        );
    }

    #[test]
    fn test_stale_drawer_reply_is_dropped() {
        let (mut shell, _rx) = shell();
        let ticket = fetch_ticket(shell.handle_key(key(KeyCode::Char('m'))));
        shell.handle_key(key(KeyCode::Esc));

        shell.handle_backend(BackendAction::ProfileLoaded {
            requester: ProfileRequester::Drawer,
            ticket,
            result: Err(ApiError::NoTokenAvailable),
        });
        assert!(!shell.alerts().has_alerts());
    }

    #[test]
    fn test_escape_returns_to_dashboard() {
        let (mut shell, _rx) = shell();
        shell.navigate(Screen::Settings);
        shell.handle_key(key(KeyCode::Esc));
        assert_eq!(shell.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_profile_screen_discards_reply_after_leaving() {
        let (mut shell, _rx) = shell();
        let ticket = fetch_ticket(shell.navigate(Screen::Profile));
        shell.navigate(Screen::Dashboard);

        let loaded = UserProfile::new(
            "1",
            "Late Reply",
            "late@example.com",
            "1",
            crate::domain::entities::ProfileStatus::Away,
            "Caller",
        );
        shell.handle_backend(BackendAction::ProfileLoaded {
            requester: ProfileRequester::ProfileScreen,
            ticket,
            result: Ok(loaded),
        });
        assert_eq!(shell.profile().full_name(), "John Doe");
    }

    #[test]
    fn test_failed_save_shows_generic_message() {
        let (mut shell, _rx) = shell();
        let ticket = fetch_ticket(shell.navigate(Screen::Profile));
        shell.handle_backend(BackendAction::ProfileLoaded {
            requester: ProfileRequester::ProfileScreen,
            ticket,
            result: Ok(UserProfile::default()),
        });
        shell.handle_key(key(KeyCode::Char('e')));
        let outcome = shell.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let ShellOutcome::Backend(BackendCommand::UpdateProfile { ticket, .. }) = outcome else {
            panic!("expected update command");
        };

        shell.handle_backend(BackendAction::ProfileSaved {
            ticket,
            result: Err(SyncError::Api(ApiError::http(500, "boom"))),
        });
        assert_eq!(
            shell.alerts().current().map(|a| a.message.as_str()),
            Some("Failed to update profile. Please try again.")
        );
    }

    #[test]
    fn test_notification_dialog_marks_read() {
        let (mut shell, _rx) = shell();
        shell.navigate(Screen::Notifications);
        let before = shell.notifications().unread_count();

        shell.handle_key(key(KeyCode::Enter));
        assert_eq!(
            shell.dialog().map(Dialog::title),
            Some("Notification Options")
        );
        shell.handle_key(key(KeyCode::Right));
        shell.handle_key(key(KeyCode::Enter));

        assert!(shell.dialog().is_none());
        assert_eq!(shell.notifications().unread_count(), before - 1);
    }

    #[test]
    fn test_sign_out_confirmation_reaches_app() {
        let (mut shell, _rx) = shell();
        shell.apply(ViewOutcome::Dialog(Dialog::confirm(
            "Sign Out",
            "Are you sure you want to sign out?",
            crate::presentation::widgets::DialogButton::confirm("Sign Out", DialogIntent::SignOut),
        )));
        assert!(matches!(
            shell.handle_key(key(KeyCode::Enter)),
            ShellOutcome::SignOut
        ));
    }

    #[test]
    fn test_failed_dial_alerts() {
        let mut intents = MockDeviceIntentPort::new();
        intents
            .expect_dial()
            .withf(|uri| uri == "tel:+15551234567")
            .times(1)
            .return_const(false);
        let (mut shell, _rx) = shell_with(intents);
        shell.navigate(Screen::Contacts);

        shell.handle_key(key(KeyCode::Char('d')));
        assert_eq!(
            shell.alerts().current().map(|a| a.message.as_str()),
            Some(DIAL_FAILED)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitted_call_is_logged_and_closes_calling() {
        let mut intents = MockDeviceIntentPort::new();
        intents.expect_dial().return_const(true);
        let (mut shell, _rx) = shell_with(intents);
        shell.navigate(Screen::Calls);

        shell.handle_key(key(KeyCode::Char('c')));
        assert!(shell.calling().is_some_and(|c| c.driver().is_active()));

        shell.apply(ViewOutcome::CallSubmitted {
            contact: "John Doe".to_string(),
            call_secs: 42,
            record: crate::domain::entities::CallOutcomeRecord::NotConnected {
                reason: crate::domain::entities::NotConnectedReason::BusyInAnotherCall,
                timestamp: chrono::Utc::now(),
            },
        });

        assert_eq!(shell.screen(), Screen::Dashboard);
        assert_eq!(shell.session_log().len(), 1);
        assert_eq!(
            shell.alerts().current().map(|a| a.message.as_str()),
            Some("Call details saved successfully!")
        );
    }
}

//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use super::backend::{Action, Backend, BackendCommand};
use super::login_screen::{LoginAction, LoginScreen};
use super::main_screen::{MainShell, ShellOutcome, ShellServices};
use crate::application::dto::{LoginRequest, TokenSource};
use crate::application::use_cases::{
    FetchProfileUseCase, LoginUseCase, ResolveTokenUseCase, UpdateProfileUseCase,
};
use crate::domain::entities::{AuthToken, UserProfile};
use crate::domain::navigation::Screen;
use crate::domain::ports::{DeviceIntentPort, DirectoryPort, ProfilePort, TokenStoragePort};
use crate::domain::{AlertLevel, SessionEvent};
use crate::infrastructure::{SessionTokenStore, SettingsState, StorageManager};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;

/// Drives alert expiry and the on-screen call timer.
const REDRAW_INTERVAL: Duration = Duration::from_millis(250);

/// Adapters the app is wired to.
pub struct AppDependencies {
    pub profile_port: Arc<dyn ProfilePort>,
    pub token_store: Arc<SessionTokenStore>,
    pub directory: Arc<dyn DirectoryPort>,
    pub intents: Arc<dyn DeviceIntentPort>,
    pub storage: StorageManager,
}

/// Startup choices taken from configuration.
pub struct AppOptions {
    pub theme: Theme,
    pub alert_duration: Duration,
    pub start_screen: Screen,
    pub settings: SettingsState,
}

enum CurrentScreen {
    Login(LoginScreen),
    Main(Box<MainShell>),
}

pub struct App {
    running: bool,
    screen: CurrentScreen,
    login_use_case: LoginUseCase,
    resolve_token_use_case: ResolveTokenUseCase,
    token_store: Arc<SessionTokenStore>,
    directory: Arc<dyn DirectoryPort>,
    intents: Arc<dyn DeviceIntentPort>,
    storage: StorageManager,
    options: AppOptions,
    backend: Option<Backend>,
    backend_tx: mpsc::UnboundedSender<BackendCommand>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    session_tx: mpsc::UnboundedSender<SessionEvent>,
    session_rx: mpsc::UnboundedReceiver<SessionEvent>,
}

impl App {
    #[must_use]
    pub fn new(deps: AppDependencies, options: AppOptions) -> Self {
        let storage_port: Arc<dyn TokenStoragePort> = deps.token_store.clone();
        let login_use_case = LoginUseCase::new(deps.profile_port.clone(), storage_port.clone());
        let resolve_token_use_case = ResolveTokenUseCase::new(storage_port.clone());

        let (backend_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let backend = Backend::new(
            FetchProfileUseCase::new(deps.profile_port.clone(), storage_port.clone()),
            UpdateProfileUseCase::new(deps.profile_port, storage_port),
            command_rx,
            action_tx,
        );
        let (session_tx, session_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            screen: CurrentScreen::Login(LoginScreen::new(&options.theme)),
            login_use_case,
            resolve_token_use_case,
            token_store: deps.token_store,
            directory: deps.directory,
            intents: deps.intents,
            storage: deps.storage,
            options,
            backend: Some(backend),
            backend_tx,
            action_rx,
            session_tx,
            session_rx,
        }
    }

    /// # Errors
    /// Returns error if the terminal cannot be drawn or read.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        cli_token: Option<String>,
    ) -> color_eyre::Result<()> {
        if let Some(backend) = self.backend.take() {
            tokio::spawn(backend.run());
        }

        if let Some(resolved) = self.resolve_token_use_case.execute(cli_token).await {
            info!(source = %resolved.source, "Found existing token");
            terminal.draw(|frame| self.render(frame))?;
            self.attempt_login(resolved.token.as_str().to_string(), resolved.source, false)
                .await;
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut redraw_interval = interval(REDRAW_INTERVAL);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                biased;

                Some(event) = self.session_rx.recv() => {
                    if let CurrentScreen::Main(shell) = &mut self.screen {
                        shell.handle_session_event(event);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if let CurrentScreen::Main(shell) = &mut self.screen {
                        shell.handle_backend(action);
                    } else {
                        debug!("Dropping backend reply received while signed out");
                    }
                }

                _ = redraw_interval.tick() => {
                    if let CurrentScreen::Main(shell) = &mut self.screen {
                        shell.tick();
                    }
                }

                event = terminal_events.next() => match event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key).await,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.running = false,
                },
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            CurrentScreen::Login(screen) => frame.render_widget(&*screen, area),
            CurrentScreen::Main(shell) => shell.render(area, frame.buffer_mut()),
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if !EventHandler::is_press(&key) {
            return;
        }
        if EventHandler::is_quit_event(&key) {
            self.running = false;
            return;
        }

        let outcome = match &mut self.screen {
            CurrentScreen::Login(screen) => {
                let action = screen.handle_key(key);
                self.handle_login_action(action).await;
                return;
            }
            CurrentScreen::Main(shell) => shell.handle_key(key),
        };
        self.handle_shell_outcome(outcome).await;
    }

    async fn handle_login_action(&mut self, action: LoginAction) {
        match action {
            LoginAction::None => {}
            LoginAction::Quit => self.running = false,
            LoginAction::Submit => {
                let CurrentScreen::Login(screen) = &self.screen else {
                    return;
                };
                let Some(token) = screen.token().map(str::to_string) else {
                    return;
                };
                let persist = screen.should_persist();
                self.attempt_login(token, TokenSource::UserInput, persist).await;
            }
            LoginAction::DeleteToken => {
                let result = self.login_use_case.delete_token().await;
                if let CurrentScreen::Login(screen) = &mut self.screen {
                    match result {
                        Ok(()) => screen.set_notice("Stored token deleted."),
                        Err(e) => screen.set_error(e.to_string()),
                    }
                }
            }
        }
    }

    async fn attempt_login(&mut self, token: String, source: TokenSource, persist: bool) {
        debug!(%source, persist, "Attempting login");
        if let CurrentScreen::Login(screen) = &mut self.screen {
            screen.set_validating();
        }

        let request = LoginRequest::new(token.clone(), source).remember(persist);

        match self.login_use_case.execute(request).await {
            Ok(response) => {
                info!(
                    user_id = %response.profile.id(),
                    source = %response.source,
                    remembered = response.remembered,
                    "Login successful"
                );
                if !response.remembered
                    && let Some(auth_token) = AuthToken::new(&token)
                {
                    self.token_store.hold(auth_token).await;
                }
                self.enter_shell(response.profile).await;
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                if let CurrentScreen::Login(screen) = &mut self.screen {
                    screen.set_error(e.to_string());
                }
            }
        }
    }

    async fn enter_shell(&mut self, profile: UserProfile) {
        let services = ShellServices {
            directory: self.directory.clone(),
            intents: self.intents.clone(),
            session_tx: self.session_tx.clone(),
            theme: self.options.theme,
            alert_duration: self.options.alert_duration,
        };
        let mut shell = MainShell::new(services, profile, self.options.settings.clone());
        let outcome = shell.navigate(self.options.start_screen);
        self.screen = CurrentScreen::Main(Box::new(shell));
        self.handle_shell_outcome(outcome).await;
    }

    async fn handle_shell_outcome(&mut self, outcome: ShellOutcome) {
        match outcome {
            ShellOutcome::None => {}
            ShellOutcome::Quit => self.running = false,
            ShellOutcome::SignOut => self.sign_out().await,
            ShellOutcome::Backend(command) => {
                if self.backend_tx.send(command).is_err() {
                    error!("Backend worker is gone");
                }
            }
            ShellOutcome::SettingsChanged(settings) => {
                if let Err(e) = self.storage.save_settings(&settings) {
                    warn!(error = %e, "Failed to save settings");
                    if let CurrentScreen::Main(shell) = &mut self.screen {
                        shell.alert(AlertLevel::Warn, "Settings", "Settings could not be saved.");
                    }
                }
                self.options.settings = settings;
            }
        }
    }

    async fn sign_out(&mut self) {
        info!("Signing out");
        if let Err(e) = self.login_use_case.delete_token().await {
            warn!(error = %e, "Token could not be removed on sign-out");
        }
        let mut login = LoginScreen::new(&self.options.theme);
        login.set_notice("You have been signed out.");
        self.screen = CurrentScreen::Login(login);
    }
}

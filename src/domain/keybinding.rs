use crossterm::event::KeyEvent;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Logout,
    ToggleHelp,
    ToggleDrawer,

    // Lists / focus
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    FocusNext,
    FocusPrevious,
    Select,
    Cancel,

    // Calling view
    StartCall,
    EndCall,
    NextCaller,
    PreviousCaller,
    OpenCallForm,
    SubmitForm,
    ToggleHistory,

    // Contacts
    Search,
    DialContact,
    EmailContact,

    // Notifications
    ToggleFilter,
    MarkRead,
    MarkAllRead,
    Delete,
    ClearAll,

    // Profile
    Edit,
    Save,
    Refresh,
    CycleStatus,
}

/// Where a key press is interpreted. Bindings registered for
/// [`KeyScope::Global`] apply everywhere a text field is not focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    Global,
    Dashboard,
    Calling,
    CallForm,
    Contacts,
    Notifications,
    Profile,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}

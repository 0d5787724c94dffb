use crate::domain::keybinding::{Action, KeyScope, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings per scope. A scope's own bindings shadow the global ones.
pub struct CommandRegistry {
    bindings: HashMap<KeyScope, Vec<Keybind>>,
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

impl Default for CommandRegistry {
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let mut bindings: HashMap<KeyScope, Vec<Keybind>> = HashMap::new();

        let mut register = |scope: KeyScope, bind: Keybind| {
            bindings.entry(scope).or_default().push(bind);
        };

        use Action as A;
        use KeyScope as S;

        register(S::Global, Keybind::new(key(KeyCode::Char('m')), A::ToggleDrawer, "Menu"));
        register(S::Global, Keybind::new(key(KeyCode::F(1)), A::ToggleHelp, "Help"));
        register(S::Global, Keybind::new(key(KeyCode::Char('?')), A::ToggleHelp, "Help").hidden());
        register(
            S::Global,
            Keybind::new(
                KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
                A::ToggleHelp,
                "Help",
            )
            .hidden(),
        );
        register(S::Global, Keybind::new(ctrl('d'), A::Logout, "Logout"));
        register(S::Global, Keybind::new(key(KeyCode::Char('q')), A::Quit, "Quit"));
        register(S::Global, Keybind::new(key(KeyCode::Up), A::NavigateUp, "Up").hidden());
        register(S::Global, Keybind::new(key(KeyCode::Char('k')), A::NavigateUp, "Up").hidden());
        register(S::Global, Keybind::new(key(KeyCode::Down), A::NavigateDown, "Down").hidden());
        register(
            S::Global,
            Keybind::new(key(KeyCode::Char('j')), A::NavigateDown, "Down").hidden(),
        );
        register(S::Global, Keybind::new(key(KeyCode::Left), A::NavigateLeft, "Left").hidden());
        register(S::Global, Keybind::new(key(KeyCode::Right), A::NavigateRight, "Right").hidden());
        register(S::Global, Keybind::new(key(KeyCode::Tab), A::FocusNext, "Next").hidden());
        register(
            S::Global,
            Keybind::new(
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                A::FocusPrevious,
                "Previous",
            )
            .hidden(),
        );
        register(S::Global, Keybind::new(key(KeyCode::Enter), A::Select, "Select").hidden());
        register(S::Global, Keybind::new(key(KeyCode::Char(' ')), A::Select, "Select").hidden());
        register(S::Global, Keybind::new(key(KeyCode::Esc), A::Cancel, "Back").hidden());

        register(S::Dashboard, Keybind::new(key(KeyCode::Char('c')), A::StartCall, "Start Calling"));
        register(S::Dashboard, Keybind::new(key(KeyCode::Enter), A::Select, "Open"));

        register(S::Calling, Keybind::new(key(KeyCode::Char('c')), A::StartCall, "Call"));
        register(S::Calling, Keybind::new(key(KeyCode::Char('e')), A::EndCall, "End"));
        register(S::Calling, Keybind::new(key(KeyCode::Char('n')), A::NextCaller, "Skip"));
        register(S::Calling, Keybind::new(key(KeyCode::Char('p')), A::PreviousCaller, "Previous"));
        register(S::Calling, Keybind::new(key(KeyCode::Char('f')), A::OpenCallForm, "Details"));
        register(S::Calling, Keybind::new(key(KeyCode::Char('h')), A::ToggleHistory, "History"));
        register(S::Calling, Keybind::new(key(KeyCode::Esc), A::Cancel, "Close"));

        register(S::CallForm, Keybind::new(key(KeyCode::Tab), A::FocusNext, "Next Field"));
        register(S::CallForm, Keybind::new(key(KeyCode::Char(' ')), A::Select, "Toggle"));
        register(S::CallForm, Keybind::new(ctrl('s'), A::SubmitForm, "Submit"));
        register(S::CallForm, Keybind::new(key(KeyCode::Esc), A::Cancel, "Back"));

        register(S::Contacts, Keybind::new(key(KeyCode::Char('/')), A::Search, "Search"));
        register(S::Contacts, Keybind::new(key(KeyCode::Char('d')), A::DialContact, "Call"));
        register(S::Contacts, Keybind::new(key(KeyCode::Char('e')), A::EmailContact, "Email"));
        register(S::Contacts, Keybind::new(key(KeyCode::Enter), A::Select, "Details"));

        register(S::Notifications, Keybind::new(key(KeyCode::Char('f')), A::ToggleFilter, "Filter"));
        register(S::Notifications, Keybind::new(key(KeyCode::Enter), A::Select, "Options"));
        register(S::Notifications, Keybind::new(key(KeyCode::Char('r')), A::MarkRead, "Mark Read"));
        register(
            S::Notifications,
            Keybind::new(key(KeyCode::Char('a')), A::MarkAllRead, "Mark All Read"),
        );
        register(S::Notifications, Keybind::new(key(KeyCode::Char('x')), A::Delete, "Delete"));
        register(S::Notifications, Keybind::new(key(KeyCode::Char('X')), A::ClearAll, "Clear All"));
        register(
            S::Notifications,
            Keybind::new(
                KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT),
                A::ClearAll,
                "Clear All",
            )
            .hidden(),
        );

        register(S::Profile, Keybind::new(key(KeyCode::Char('e')), A::Edit, "Edit"));
        register(S::Profile, Keybind::new(ctrl('s'), A::Save, "Save"));
        register(S::Profile, Keybind::new(key(KeyCode::Char('r')), A::Refresh, "Refresh"));
        register(S::Profile, Keybind::new(ctrl('t'), A::CycleStatus, "Status"));
        register(S::Profile, Keybind::new(key(KeyCode::Esc), A::Cancel, "Cancel"));

        register(S::Settings, Keybind::new(key(KeyCode::Enter), A::Select, "Toggle / Open"));

        Self { bindings }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action bound to `key` in `scope`, falling back to global bindings.
    pub fn find_action(&self, scope: KeyScope, key: KeyEvent) -> Option<Action> {
        let matches = |bind: &&Keybind| bind.key.code == key.code && bind.key.modifiers == key.modifiers;

        self.bindings
            .get(&scope)
            .and_then(|binds| binds.iter().find(matches))
            .or_else(|| {
                self.bindings
                    .get(&KeyScope::Global)
                    .and_then(|binds| binds.iter().find(matches))
            })
            .map(|bind| bind.action)
    }

    /// Bindings shown in the footer for `scope`, scope-specific first.
    pub fn bar(&self, scope: KeyScope) -> Vec<Keybind> {
        let own = self.bindings.get(&scope).into_iter().flatten();
        let global = if scope == KeyScope::Global {
            None
        } else {
            self.bindings.get(&KeyScope::Global)
        };

        let mut seen = Vec::new();
        own.chain(global.into_iter().flatten())
            .filter(|bind| bind.visible_in_bar)
            .filter(|bind| {
                if seen.contains(&bind.action) {
                    false
                } else {
                    seen.push(bind.action);
                    true
                }
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_shadows_global() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyScope::Calling, key(KeyCode::Esc)),
            Some(Action::Cancel)
        );
        assert_eq!(
            registry.find_action(KeyScope::Calling, key(KeyCode::Char('e'))),
            Some(Action::EndCall)
        );
        assert_eq!(
            registry.find_action(KeyScope::Profile, key(KeyCode::Char('e'))),
            Some(Action::Edit)
        );
    }

    #[test]
    fn test_global_fallback() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyScope::Contacts, key(KeyCode::Char('m'))),
            Some(Action::ToggleDrawer)
        );
        assert_eq!(
            registry.find_action(KeyScope::Settings, key(KeyCode::Char('j'))),
            Some(Action::NavigateDown)
        );
        assert_eq!(registry.find_action(KeyScope::Settings, ctrl('z')), None);
    }

    #[test]
    fn test_bar_hides_duplicates_and_hidden() {
        let registry = CommandRegistry::new();
        let bar = registry.bar(KeyScope::Calling);

        assert_eq!(bar[0].action, Action::StartCall);
        assert!(bar.iter().all(|b| b.visible_in_bar));
        let cancels = bar.iter().filter(|b| b.action == Action::Cancel).count();
        assert!(cancels <= 1);
        assert!(bar.iter().any(|b| b.action == Action::ToggleDrawer));
    }
}

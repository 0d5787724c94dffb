//! Presentation layer with UI components and event handling.

/// Key bindings per scope.
pub mod commands;
/// Event handling.
pub mod events;
/// Colour theme.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;

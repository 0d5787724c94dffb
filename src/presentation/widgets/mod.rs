mod dialog;
mod drawer;
mod footer_bar;
mod header_bar;
mod input;
mod status_bar;

pub use dialog::{Dialog, DialogButton, DialogIntent, DialogResult};
pub use drawer::{
    DRAWER_WIDTH, Drawer, DrawerAction, DrawerIdentity, DrawerState, drawer_initials,
};
pub use footer_bar::{FooterBar, FooterBarStyle, scope_label};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use status_bar::{StatusBar, StatusLevel};

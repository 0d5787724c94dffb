//! Stateful services driven by the UI loop.

pub mod alert_queue;
pub mod call_form;
pub mod call_session_driver;
pub mod caller_queue;
pub mod notification_center;
pub mod session_log;

pub use alert_queue::AlertQueue;
pub use call_form::{CallDetailsForm, CallFormDraft, FieldKind, FormField, FormStep};
pub use call_session_driver::CallSessionDriver;
pub use caller_queue::{CallerQueue, QueueMove};
pub use notification_center::{NotificationCenter, NotificationFilter};
pub use session_log::{LoggedCall, SessionLog};

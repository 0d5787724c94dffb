//! Domain entity definitions.

mod call_history;
mod call_outcome;
mod contact;
mod notification_record;
mod profile;
mod token;

pub use call_history::{CallDirection, CallLineStatus, PastOutcome, PreviousCall};
pub use call_outcome::{CallOutcomeRecord, ConnectedDetails, NotConnectedReason};
pub use contact::{ContactRecord, initials_of};
pub use notification_record::{NotificationKind, NotificationRecord};
pub use profile::{
    DEFAULT_AVATAR_URL, DEFAULT_EMAIL, DEFAULT_FULL_NAME, DEFAULT_MOBILE, DEFAULT_ROLE,
    ProfileStatus, ProfileUpdate, UserProfile, is_valid_email,
};
pub use token::AuthToken;

//! Branching call-details form.
//!
//! `Connection` asks whether the customer was reached and branches into
//! `NotConnected` (pick a reason) or `Connected` (interest plus follow-up
//! details). A successful submit yields a [`CallOutcomeRecord`] and puts
//! the form back at `Connection` with a blank draft.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::entities::{CallOutcomeRecord, ConnectedDetails, NotConnectedReason};
use crate::domain::errors::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    Connection,
    NotConnected,
    Connected,
}

/// Everything typed or toggled so far. Values hidden by the current
/// visibility rules are kept and submitted as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFormDraft {
    pub is_connected: Option<bool>,
    pub reason: Option<NotConnectedReason>,
    pub customer_interested: Option<bool>,
    pub is_scheduled: bool,
    pub follow_up_date: String,
    pub donation_amount: String,
    pub call_outcome: String,
    pub remarks: String,
    pub do_not_disturb: bool,
    pub valuable_customer: bool,
    pub appointment_scheduled: bool,
}

impl CallFormDraft {
    /// Shared rule for the call-outcome and next-follow-up fields.
    fn outcome_prompt_visible(&self) -> bool {
        match self.customer_interested {
            Some(false) => true,
            Some(true) => self.donation_amount.is_empty(),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Choice,
    Toggle,
    Text,
}

/// Inputs of the connected step, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Interest,
    Scheduled,
    DoNotDisturb,
    FollowUpDate,
    DonationAmount,
    CallOutcome,
    NextFollowUpDate,
    Remarks,
    ValuableCustomer,
    AppointmentScheduled,
}

impl FormField {
    pub const CONNECTED_STEP: [Self; 10] = [
        Self::Interest,
        Self::Scheduled,
        Self::DoNotDisturb,
        Self::FollowUpDate,
        Self::DonationAmount,
        Self::CallOutcome,
        Self::NextFollowUpDate,
        Self::Remarks,
        Self::ValuableCustomer,
        Self::AppointmentScheduled,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest => "Customer Interest",
            Self::Scheduled => "Scheduled Call",
            Self::DoNotDisturb => "Do Not Disturb",
            Self::FollowUpDate => "Follow-up Date",
            Self::DonationAmount => "Donation Amount",
            Self::CallOutcome => "Call Outcome",
            Self::NextFollowUpDate => "Next Follow-up Date",
            Self::Remarks => "Remarks",
            Self::ValuableCustomer => "Valuable Customer",
            Self::AppointmentScheduled => "Appointment Scheduled",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FollowUpDate => "Select follow-up date",
            Self::DonationAmount => "Enter donation amount",
            Self::CallOutcome => "What was the outcome?",
            Self::NextFollowUpDate => "When should we follow up?",
            Self::Remarks => "Additional remarks...",
            _ => "",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Interest => FieldKind::Choice,
            Self::Scheduled
            | Self::DoNotDisturb
            | Self::ValuableCustomer
            | Self::AppointmentScheduled => FieldKind::Toggle,
            Self::FollowUpDate
            | Self::DonationAmount
            | Self::CallOutcome
            | Self::NextFollowUpDate
            | Self::Remarks => FieldKind::Text,
        }
    }

    #[must_use]
    pub fn is_visible(self, draft: &CallFormDraft) -> bool {
        match self {
            Self::Interest | Self::Scheduled | Self::Remarks | Self::AppointmentScheduled => true,
            Self::DoNotDisturb => draft.customer_interested == Some(false),
            Self::FollowUpDate => draft.is_scheduled,
            Self::DonationAmount | Self::ValuableCustomer => draft.customer_interested == Some(true),
            Self::CallOutcome | Self::NextFollowUpDate => draft.outcome_prompt_visible(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallDetailsForm {
    step: FormStep,
    draft: CallFormDraft,
}

impl CallDetailsForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> FormStep {
        self.step
    }

    #[must_use]
    pub const fn draft(&self) -> &CallFormDraft {
        &self.draft
    }

    pub fn choose_connection(&mut self, connected: bool) {
        self.draft.is_connected = Some(connected);
        self.step = if connected {
            FormStep::Connected
        } else {
            FormStep::NotConnected
        };
    }

    /// Back to the connection question. The draft is kept.
    pub fn back(&mut self) {
        self.step = FormStep::Connection;
    }

    pub fn select_reason(&mut self, reason: NotConnectedReason) {
        self.draft.reason = Some(reason);
    }

    pub fn set_interest(&mut self, interested: bool) {
        self.draft.customer_interested = Some(interested);
    }

    /// Connected-step fields shown for the current draft.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::CONNECTED_STEP
            .into_iter()
            .filter(|field| field.is_visible(&self.draft))
            .collect()
    }

    /// Flips a checkbox field. Other fields are left alone.
    pub fn toggle(&mut self, field: FormField) {
        let flag = match field {
            FormField::Scheduled => &mut self.draft.is_scheduled,
            FormField::DoNotDisturb => &mut self.draft.do_not_disturb,
            FormField::ValuableCustomer => &mut self.draft.valuable_customer,
            FormField::AppointmentScheduled => &mut self.draft.appointment_scheduled,
            _ => return,
        };
        *flag = !*flag;
    }

    #[must_use]
    pub fn flag(&self, field: FormField) -> Option<bool> {
        match field {
            FormField::Interest => self.draft.customer_interested,
            FormField::Scheduled => Some(self.draft.is_scheduled),
            FormField::DoNotDisturb => Some(self.draft.do_not_disturb),
            FormField::ValuableCustomer => Some(self.draft.valuable_customer),
            FormField::AppointmentScheduled => Some(self.draft.appointment_scheduled),
            _ => None,
        }
    }

    /// Text behind a text field. Both follow-up fields share one value.
    #[must_use]
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FollowUpDate | FormField::NextFollowUpDate => {
                Some(&self.draft.follow_up_date)
            }
            FormField::DonationAmount => Some(&self.draft.donation_amount),
            FormField::CallOutcome => Some(&self.draft.call_outcome),
            FormField::Remarks => Some(&self.draft.remarks),
            _ => None,
        }
    }

    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FollowUpDate | FormField::NextFollowUpDate => {
                &mut self.draft.follow_up_date
            }
            FormField::DonationAmount => &mut self.draft.donation_amount,
            FormField::CallOutcome => &mut self.draft.call_outcome,
            FormField::Remarks => &mut self.draft.remarks,
            _ => return,
        };
        *slot = value.into();
    }

    /// Builds the record for the current step and resets the form.
    ///
    /// # Errors
    /// The required choice of the current step is missing. The draft is
    /// left as it was.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<CallOutcomeRecord, FormError> {
        let record = match self.step {
            FormStep::Connection => return Err(FormError::MissingConnectionChoice),
            FormStep::NotConnected => {
                let reason = self.draft.reason.ok_or(FormError::MissingReason)?;
                CallOutcomeRecord::NotConnected {
                    reason,
                    timestamp: now,
                }
            }
            FormStep::Connected => {
                let customer_interested = self
                    .draft
                    .customer_interested
                    .ok_or(FormError::MissingInterest)?;
                let draft = std::mem::take(&mut self.draft);
                CallOutcomeRecord::Connected {
                    details: ConnectedDetails {
                        customer_interested,
                        is_scheduled: draft.is_scheduled,
                        follow_up_date: draft.follow_up_date,
                        donation_amount: draft.donation_amount,
                        call_outcome: draft.call_outcome,
                        remarks: draft.remarks,
                        do_not_disturb: draft.do_not_disturb,
                        valuable_customer: draft.valuable_customer,
                        appointment_scheduled: draft.appointment_scheduled,
                    },
                    timestamp: now,
                }
            }
        };

        debug!(outcome = %record.summary(), "Call details submitted");
        self.reset();
        Ok(record)
    }

    pub fn reset(&mut self) {
        self.step = FormStep::Connection;
        self.draft = CallFormDraft::default();
    }
}

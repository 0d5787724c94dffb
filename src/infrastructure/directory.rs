//! Built-in caller directory and call history.

use std::collections::HashMap;

use crate::domain::entities::{
    CallDirection, CallLineStatus, ContactRecord, PastOutcome, PreviousCall,
};
use crate::domain::ports::DirectoryPort;

/// In-memory directory loaded once at startup.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    contacts: Vec<ContactRecord>,
    history: HashMap<String, Vec<PreviousCall>>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new(contacts: Vec<ContactRecord>, history: HashMap<String, Vec<PreviousCall>>) -> Self {
        Self { contacts, history }
    }

    /// The demo book the calling desk ships with.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_contacts(), demo_history())
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::demo()
    }
}

impl DirectoryPort for StaticDirectory {
    fn contacts(&self) -> &[ContactRecord] {
        &self.contacts
    }

    fn history_for(&self, contact_name: &str) -> &[PreviousCall] {
        self.history.get(contact_name).map_or(&[][..], Vec::as_slice)
    }
}

fn demo_contacts() -> Vec<ContactRecord> {
    [
        (
            "John Doe",
            "+1 (555) 123-4567",
            "ABC Corp",
            "Manager",
            "john.doe@abccorp.com",
            "123 Business St, City, State 12345",
        ),
        (
            "Jane Smith",
            "+1 (555) 987-6543",
            "Tech Solutions Inc.",
            "Senior Developer",
            "jane.smith@techsolutions.com",
            "456 Innovation Drive, Tech City, TC 67890",
        ),
        (
            "Michael Johnson",
            "+1 (555) 456-7890",
            "Global Marketing Ltd.",
            "Marketing Director",
            "michael.johnson@globalmarketing.com",
            "789 Creative Avenue, Marketing Hub, MH 54321",
        ),
        (
            "Sarah Williams",
            "+1 (555) 321-6547",
            "DataFlow Systems",
            "Data Analyst",
            "sarah.williams@dataflow.com",
            "321 Analytics Street, Data City, DC 98765",
        ),
        (
            "Robert Brown",
            "+1 (555) 654-3210",
            "NextGen Industries",
            "CEO",
            "robert.brown@nextgen.com",
            "654 Executive Plaza, Business District, BD 13579",
        ),
        (
            "Emily Davis",
            "+1 (555) 789-0123",
            "Creative Design Studio",
            "Art Director",
            "emily.davis@creativedesign.com",
            "987 Design Boulevard, Art Quarter, AQ 24680",
        ),
        (
            "David Wilson",
            "+1 (555) 012-3456",
            "Financial Advisors Inc.",
            "Senior Consultant",
            "david.wilson@financialadvisors.com",
            "159 Money Street, Finance District, FD 11223",
        ),
        (
            "Lisa Thompson",
            "+1 (555) 345-6789",
            "HealthCare Plus",
            "Operations Manager",
            "lisa.thompson@healthcareplus.com",
            "753 Wellness Way, Medical Center, MC 33445",
        ),
    ]
    .into_iter()
    .map(|(name, phone, company, designation, email, address)| {
        ContactRecord::new(name, phone, company, designation, email, address)
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn call(
    id: &str,
    date: &str,
    time: &str,
    duration: &str,
    direction: CallDirection,
    status: CallLineStatus,
    notes: &str,
    outcome: PastOutcome,
    follow_up_date: Option<&str>,
) -> PreviousCall {
    PreviousCall {
        id: id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        duration: duration.to_string(),
        direction,
        status,
        notes: notes.to_string(),
        outcome,
        follow_up_date: follow_up_date.map(str::to_string),
    }
}

#[allow(clippy::too_many_lines)]
fn demo_history() -> HashMap<String, Vec<PreviousCall>> {
    use CallDirection::{Incoming, Outgoing};
    use CallLineStatus::{Busy, Completed, NoAnswer};
    use PastOutcome::{Callback, Interested, NoResponse, NotInterested};

    let mut history = HashMap::new();
    history.insert(
        "John Doe".to_string(),
        vec![
            call(
                "1",
                "2024-01-15",
                "10:30 AM",
                "8:45",
                Outgoing,
                Completed,
                "Discussed project requirements and timeline. Client showed interest in our services.",
                Interested,
                Some("2024-01-20"),
            ),
            call(
                "2",
                "2024-01-08",
                "2:15 PM",
                "3:22",
                Incoming,
                Completed,
                "Initial inquiry about our products. Requested product demo.",
                Callback,
                Some("2024-01-10"),
            ),
            call(
                "3",
                "2024-01-03",
                "11:00 AM",
                "0:00",
                Outgoing,
                NoAnswer,
                "No response. Left voicemail.",
                NoResponse,
                Some("2024-01-05"),
            ),
        ],
    );
    history.insert(
        "Jane Smith".to_string(),
        vec![
            call(
                "4",
                "2024-01-12",
                "3:45 PM",
                "12:30",
                Outgoing,
                Completed,
                "Technical discussion about system integration. Very positive response.",
                Interested,
                Some("2024-01-18"),
            ),
            call(
                "5",
                "2024-01-05",
                "9:20 AM",
                "5:15",
                Incoming,
                Completed,
                "Asked about pricing and implementation timeline.",
                Callback,
                None,
            ),
        ],
    );
    history.insert(
        "Michael Johnson".to_string(),
        vec![call(
            "6",
            "2024-01-14",
            "1:30 PM",
            "6:45",
            Outgoing,
            Completed,
            "Marketing strategy discussion. Interested in our digital marketing services.",
            Interested,
            Some("2024-01-21"),
        )],
    );
    history.insert(
        "Sarah Williams".to_string(),
        vec![
            call(
                "7",
                "2024-01-11",
                "4:00 PM",
                "2:15",
                Outgoing,
                Completed,
                "Brief call about data analytics tools. Not the right fit currently.",
                NotInterested,
                None,
            ),
            call(
                "8",
                "2024-01-07",
                "10:15 AM",
                "0:00",
                Outgoing,
                Busy,
                "Line was busy. Will try again later.",
                NoResponse,
                Some("2024-01-09"),
            ),
        ],
    );
    history.insert(
        "Robert Brown".to_string(),
        vec![
            call(
                "9",
                "2024-01-13",
                "11:45 AM",
                "15:20",
                Incoming,
                Completed,
                "Executive level discussion about enterprise solutions. Very interested in partnership.",
                Interested,
                Some("2024-01-20"),
            ),
            call(
                "10",
                "2024-01-06",
                "3:30 PM",
                "7:45",
                Outgoing,
                Completed,
                "Initial business development call. Good rapport established.",
                Callback,
                Some("2024-01-10"),
            ),
        ],
    );
    history.insert(
        "Emily Davis".to_string(),
        vec![call(
            "11",
            "2024-01-10",
            "2:20 PM",
            "4:30",
            Outgoing,
            Completed,
            "Creative project discussion. Interested in our design services.",
            Interested,
            Some("2024-01-17"),
        )],
    );
    history.insert("David Wilson".to_string(), Vec::new());
    history.insert(
        "Lisa Thompson".to_string(),
        vec![call(
            "12",
            "2024-01-09",
            "9:45 AM",
            "8:15",
            Incoming,
            Completed,
            "Healthcare solution inquiry. Discussed compliance requirements.",
            Callback,
            Some("2024-01-15"),
        )],
    );
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_book() {
        let directory = StaticDirectory::demo();
        assert_eq!(directory.contacts().len(), 8);
        assert_eq!(directory.contacts()[0].name, "John Doe");
        assert_eq!(directory.contacts()[7].name, "Lisa Thompson");
    }

    #[test]
    fn test_every_contact_has_a_history_entry() {
        let directory = StaticDirectory::demo();
        let total: usize = directory
            .contacts()
            .iter()
            .map(|c| directory.history_for(&c.name).len())
            .sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_history_lookup() {
        let directory = StaticDirectory::demo();
        let john = directory.history_for("John Doe");
        assert_eq!(john.len(), 3);
        assert_eq!(john[2].status, CallLineStatus::NoAnswer);

        assert!(directory.history_for("David Wilson").is_empty());
        assert!(directory.history_for("Nobody").is_empty());
    }
}

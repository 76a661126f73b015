//! Pretty output formatting.

use agenda_core::records::{EntityKind, Listing, Record, RecordId, RecordIndex, Resolved};

/// One-line summary of a record.
pub fn format_record(record: &Record) -> String {
    match record {
        Record::Meeting(m) => format!(
            "(Meeting) id: {} | title: {} | date: {} | location: {} | details: {}",
            m.id, m.title, m.datetime, m.location, m.details
        ),
        Record::Calendar(c) => format!(
            "(Calendar) id: {} | title: {} | details: {}",
            c.id, c.title, c.details
        ),
        Record::Participant(p) => format!(
            "(Participant) id: {} | name: {} | email: {}",
            p.id, p.name, p.email
        ),
        Record::Attachment(a) => format!("(Attachment) id: {} | url: {}", a.id, a.url),
    }
}

/// Related-record sections, one per relation the record owns.
///
/// Ids the index cannot resolve are shown by id alone.
pub fn format_related(record: &Record, index: &RecordIndex) -> String {
    let mut output = String::new();
    for relation in record.kind().relations() {
        output.push_str(relation.heading());
        output.push_str(":\n");
        for resolved in index.related(record, *relation) {
            let line = match resolved {
                Resolved::Found(related) => format_record(related),
                Resolved::Missing(id) => {
                    format!("({}) id: {}", relation.related_kind().label(), id)
                }
            };
            output.push('\t');
            output.push_str(&line);
            output.push('\n');
        }
    }
    output
}

/// Format a list result.
pub fn format_listing(kind: EntityKind, listing: &Listing) -> String {
    let mut output = format!("Listing all {}.", kind.collection());
    if listing.is_empty() {
        output.push_str(&format!("\nNo {} found.", kind.collection()));
        return output;
    }
    for record in &listing.records {
        output.push('\n');
        output.push_str(&format_record(record));
        let related = format_related(record, &listing.related);
        if !related.is_empty() {
            output.push('\n');
            output.push_str(related.trim_end_matches('\n'));
        }
    }
    output
}

fn article(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Attachment => "an",
        EntityKind::Meeting | EntityKind::Calendar | EntityKind::Participant => "a",
    }
}

pub fn created_message(kind: EntityKind, id: &RecordId) -> String {
    format!("Successfully created {} {kind} ({id})", article(kind))
}

pub fn updated_message(kind: EntityKind, id: &RecordId) -> String {
    format!("Successfully updated {kind} ({id})")
}

pub fn deleted_message(kind: EntityKind, id: &RecordId) -> String {
    format!("Deleting {kind} with UUID = {id}")
}

#[cfg(test)]
mod tests {
    use agenda_core::records::{Calendar, Meeting, Participant};

    use super::*;

    fn id(value: &str) -> RecordId {
        RecordId::parse(value).unwrap()
    }

    fn meeting() -> Meeting {
        let mut meeting = Meeting::new(id("M1"));
        meeting.title = "Sync".to_string();
        meeting.datetime = "2024-06-01 02:30 PM".to_string();
        meeting.location = "Room 1".to_string();
        meeting.details = "Weekly".to_string();
        meeting
    }

    #[test]
    fn test_format_meeting() {
        assert_eq!(
            format_record(&meeting().into()),
            "(Meeting) id: M1 | title: Sync | date: 2024-06-01 02:30 PM | \
             location: Room 1 | details: Weekly"
        );
    }

    #[test]
    fn test_format_participant() {
        let mut participant = Participant::new(id("P1"));
        participant.name = "Ann".to_string();
        participant.email = "ann@x.com".to_string();
        assert_eq!(
            format_record(&participant.into()),
            "(Participant) id: P1 | name: Ann | email: ann@x.com"
        );
    }

    #[test]
    fn test_format_related_sections() {
        let mut meeting = meeting();
        meeting.participants.insert(id("P1"));
        meeting.participants.insert(id("P2"));
        meeting.calendars.insert(id("C1"));

        let mut index = RecordIndex::new();
        let mut participant = Participant::new(id("P1"));
        participant.name = "Ann".to_string();
        participant.email = "ann@x.com".to_string();
        index.insert(participant.into());

        let output = format_related(&meeting.into(), &index);
        assert_eq!(
            output,
            "Calendars:\n\
             \t(Calendar) id: C1\n\
             Participants:\n\
             \t(Participant) id: P1 | name: Ann | email: ann@x.com\n\
             \t(Participant) id: P2\n\
             Attachments:\n"
        );
    }

    #[test]
    fn test_format_related_none_for_participants() {
        let record = Record::from(Participant::new(id("P1")));
        assert_eq!(format_related(&record, &RecordIndex::new()), "");
    }

    #[test]
    fn test_format_listing() {
        let mut calendar = Calendar::new(id("C1"));
        calendar.title = "Team".to_string();
        let listing = Listing::new(vec![calendar.into()]);

        assert_eq!(
            format_listing(EntityKind::Calendar, &listing),
            "Listing all calendars.\n(Calendar) id: C1 | title: Team | details: \nMeetings:"
        );
    }

    #[test]
    fn test_format_empty_listing() {
        assert_eq!(
            format_listing(EntityKind::Attachment, &Listing::default()),
            "Listing all attachments.\nNo attachments found."
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            created_message(EntityKind::Meeting, &id("M1")),
            "Successfully created a meeting (M1)"
        );
        assert_eq!(
            created_message(EntityKind::Attachment, &id("A1")),
            "Successfully created an attachment (A1)"
        );
        assert_eq!(
            updated_message(EntityKind::Meeting, &id("M1")),
            "Successfully updated meeting (M1)"
        );
        assert_eq!(
            deleted_message(EntityKind::Calendar, &id("C1")),
            "Deleting calendar with UUID = C1"
        );
    }
}

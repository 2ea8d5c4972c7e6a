use std::sync::{Arc, Mutex};

use super::*;

fn recording_sink() -> (DraftSink, Arc<Mutex<Vec<PatientDraft>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_sink = Arc::clone(&seen);
    let sink = DraftSink::new(move |draft| seen_in_sink.lock().unwrap().push(draft.clone()));
    (sink, seen)
}

fn type_into(draft: &mut PatientDraft, name: &str, text: &str) {
    for end in 1..=text.len() {
        draft.apply_change(name, &text[..end]);
    }
}

#[test]
fn complete_draft_is_submitted_exactly_once() {
    let (sink, seen) = recording_sink();
    let mut draft = PatientDraft::default();
    type_into(&mut draft, "firstName", "Ada");
    type_into(&mut draft, "lastName", "Lovelace");
    type_into(&mut draft, "email", "ada@example.com");

    assert_eq!(submit_draft(&draft, &sink), Ok(()));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        serde_json::to_value(&seen[0]).unwrap(),
        serde_json::json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" })
    );
}

#[test]
fn submitted_record_reflects_last_entered_values() {
    let (sink, seen) = recording_sink();
    let mut draft = PatientDraft::default();
    draft.apply_change("firstName", "Ada");
    draft.apply_change("lastName", "Byron");
    draft.apply_change("email", "ada@example.com");
    draft.apply_change("lastName", "Lovelace");

    submit_draft(&draft, &sink).unwrap();

    assert_eq!(seen.lock().unwrap()[0].last_name, "Lovelace");
}

#[test]
fn any_empty_field_blocks_the_sink() {
    let (sink, seen) = recording_sink();
    let full = PatientDraft {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
    };

    for field in DraftField::ALL {
        let mut draft = full.clone();
        draft.set(field, "");
        assert_eq!(submit_draft(&draft, &sink), Err(vec![field]));
    }
    assert_eq!(submit_draft(&PatientDraft::default(), &sink), Err(DraftField::ALL.to_vec()));

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn submit_does_not_clear_the_draft() {
    let (sink, _seen) = recording_sink();
    let draft = PatientDraft {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
    };
    let before = draft.clone();

    submit_draft(&draft, &sink).unwrap();

    assert_eq!(draft, before);
}

#[test]
fn blocked_submit_message_names_missing_inputs() {
    assert_eq!(
        blocked_submit_message(&[DraftField::FirstName, DraftField::Email]),
        "registration submit blocked, missing: firstName, email"
    );
}

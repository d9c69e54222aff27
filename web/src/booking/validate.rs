use shared_types::{NewBooking, NewContactRequest};

use super::slots::{is_known_property_type, is_known_service, is_known_slot};
use super::wizard::BookingDraft;

/// One violated constraint, keyed by the wire-format field name so the
/// client and the collector report errors identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// A value pulled out of a form for constraint checking.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

/// The constraint vocabulary. Every field rule is one of these, evaluated
/// uniformly; nothing short-circuits, so all violations surface at once.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    MinLen(usize),
    Email,
    Required,
    Member(fn(&str) -> bool),
    Accepted,
}

pub struct FieldRule<T> {
    pub field: &'static str,
    pub message: &'static str,
    pub get: for<'a> fn(&'a T) -> FieldValue<'a>,
    pub constraint: Constraint,
}

fn satisfies(value: FieldValue<'_>, constraint: Constraint) -> bool {
    match (value, constraint) {
        (FieldValue::Text(s), Constraint::MinLen(n)) => s.chars().count() >= n,
        (FieldValue::Text(s), Constraint::Email) => is_valid_email(s),
        (FieldValue::Text(s), Constraint::Required) => !s.is_empty(),
        (FieldValue::Text(s), Constraint::Member(check)) => check(s),
        (FieldValue::Flag(b), Constraint::Accepted) => b,
        // A mismatched rule shape never validates.
        _ => false,
    }
}

fn run_rules<T>(rules: &[FieldRule<T>], form: &T) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| !satisfies((rule.get)(form), rule.constraint))
        .map(|rule| FieldError {
            field: rule.field,
            message: rule.message.to_string(),
        })
        .collect()
}

/// Minimal syntactic email check: one `@`, a non-empty local part, and a
/// dotted domain with non-empty labels.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

const BOOKING_RULES: &[FieldRule<BookingDraft>] = &[
    FieldRule {
        field: "firstName",
        message: "First name must be at least 2 characters",
        get: |d| FieldValue::Text(&d.first_name),
        constraint: Constraint::MinLen(2),
    },
    FieldRule {
        field: "lastName",
        message: "Last name must be at least 2 characters",
        get: |d| FieldValue::Text(&d.last_name),
        constraint: Constraint::MinLen(2),
    },
    FieldRule {
        field: "email",
        message: "Please enter a valid email address",
        get: |d| FieldValue::Text(&d.email),
        constraint: Constraint::Email,
    },
    FieldRule {
        field: "phone",
        message: "Please enter a valid phone number",
        get: |d| FieldValue::Text(&d.phone),
        constraint: Constraint::MinLen(10),
    },
    FieldRule {
        field: "address",
        message: "Please enter your address",
        get: |d| FieldValue::Text(&d.address),
        constraint: Constraint::MinLen(5),
    },
    FieldRule {
        field: "city",
        message: "Please enter your city",
        get: |d| FieldValue::Text(&d.city),
        constraint: Constraint::MinLen(2),
    },
    FieldRule {
        field: "state",
        message: "Please enter your state",
        get: |d| FieldValue::Text(&d.state),
        constraint: Constraint::MinLen(2),
    },
    FieldRule {
        field: "zipCode",
        message: "Please enter a valid ZIP code",
        get: |d| FieldValue::Text(&d.zip_code),
        constraint: Constraint::MinLen(5),
    },
    FieldRule {
        field: "serviceType",
        message: "Please select a service type",
        get: |d| FieldValue::Text(&d.service_type),
        constraint: Constraint::Member(is_known_service),
    },
    FieldRule {
        field: "propertyType",
        message: "Please select a property type",
        get: |d| FieldValue::Text(&d.property_type),
        constraint: Constraint::Member(is_known_property_type),
    },
    FieldRule {
        field: "date",
        message: "Please select a date",
        get: |d| FieldValue::Text(&d.date),
        constraint: Constraint::Required,
    },
    FieldRule {
        field: "time",
        message: "Please select a time",
        get: |d| FieldValue::Text(&d.time),
        constraint: Constraint::Member(is_known_slot),
    },
    // notes is optional and unconstrained
    FieldRule {
        field: "terms",
        message: "You must agree to the terms",
        get: |d| FieldValue::Flag(d.terms_accepted),
        constraint: Constraint::Accepted,
    },
];

const CONTACT_RULES: &[FieldRule<NewContactRequest>] = &[
    FieldRule {
        field: "firstName",
        message: "First name must be at least 2 characters",
        get: |c| FieldValue::Text(&c.first_name),
        constraint: Constraint::MinLen(2),
    },
    FieldRule {
        field: "lastName",
        message: "Last name must be at least 2 characters",
        get: |c| FieldValue::Text(&c.last_name),
        constraint: Constraint::MinLen(2),
    },
    FieldRule {
        field: "email",
        message: "Please enter a valid email address",
        get: |c| FieldValue::Text(&c.email),
        constraint: Constraint::Email,
    },
    // phone and serviceInterest are optional
    FieldRule {
        field: "message",
        message: "Message must be at least 10 characters",
        get: |c| FieldValue::Text(&c.message),
        constraint: Constraint::MinLen(10),
    },
];

/// Validate the wizard draft. Empty result means the form is valid.
pub fn validate_booking(draft: &BookingDraft) -> Vec<FieldError> {
    run_rules(BOOKING_RULES, draft)
}

/// Collector-side check of an incoming booking. Reuses the client table so
/// the two ends can never disagree; the terms gate has already been
/// stripped by then.
pub fn validate_new_booking(new: &NewBooking) -> Vec<FieldError> {
    let draft = BookingDraft {
        first_name: new.first_name.clone(),
        last_name: new.last_name.clone(),
        email: new.email.clone(),
        phone: new.phone.clone(),
        address: new.address.clone(),
        city: new.city.clone(),
        state: new.state.clone(),
        zip_code: new.zip_code.clone(),
        service_type: new.service_type.clone(),
        property_type: new.property_type.clone(),
        date: new.date.clone(),
        time: new.time.clone(),
        notes: new.notes.clone().unwrap_or_default(),
        terms_accepted: true,
    };
    validate_booking(&draft)
}

pub fn validate_contact(request: &NewContactRequest) -> Vec<FieldError> {
    run_rules(CONTACT_RULES, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            first_name: "Alex".into(),
            last_name: "Morgan".into(),
            email: "alex@example.com".into(),
            phone: "5551234567".into(),
            address: "12 Main Street".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62704".into(),
            service_type: "extinguisher".into(),
            property_type: "commercial".into(),
            date: "2025-03-10".into(),
            time: "09:00".into(),
            notes: String::new(),
            terms_accepted: true,
        }
    }

    fn errors_for(draft: &BookingDraft) -> Vec<&'static str> {
        validate_booking(draft).into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_booking(&valid_draft()).is_empty());
    }

    #[test]
    fn name_length_boundary() {
        let mut draft = valid_draft();
        draft.first_name = "A".into();
        assert_eq!(errors_for(&draft), vec!["firstName"]);

        draft.first_name = "Al".into();
        assert!(validate_booking(&draft).is_empty());
    }

    #[test]
    fn email_syntax() {
        let mut draft = valid_draft();
        for bad in ["not-an-email", "", "a@b", "@b.com", "a@", "a b@c.com", "a@b..com"] {
            draft.email = bad.into();
            assert_eq!(errors_for(&draft), vec!["email"], "{bad:?} should fail");
        }
        for good in ["a@b.com", "first.last@mail.example.org"] {
            draft.email = good.into();
            assert!(validate_booking(&draft).is_empty(), "{good:?} should pass");
        }
    }

    #[test]
    fn terms_must_be_accepted_regardless_of_other_fields() {
        let mut draft = valid_draft();
        draft.terms_accepted = false;
        let errors = validate_booking(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "terms");
        assert_eq!(errors[0].message, "You must agree to the terms");
    }

    #[test]
    fn all_violations_surface_at_once() {
        let draft = BookingDraft::default();
        let errors = validate_booking(&draft);
        assert_eq!(errors.len(), BOOKING_RULES.len());
    }

    #[test]
    fn enumerated_fields_must_come_from_their_sets() {
        let mut draft = valid_draft();
        draft.service_type = "sprinklers".into();
        assert_eq!(errors_for(&draft), vec!["serviceType"]);

        let mut draft = valid_draft();
        draft.time = "12:00".into();
        assert_eq!(errors_for(&draft), vec!["time"]);
    }

    #[test]
    fn phone_and_zip_minimums() {
        let mut draft = valid_draft();
        draft.phone = "555123456".into(); // 9 chars
        assert_eq!(errors_for(&draft), vec!["phone"]);

        let mut draft = valid_draft();
        draft.zip_code = "6270".into();
        assert_eq!(errors_for(&draft), vec!["zipCode"]);
    }

    #[test]
    fn notes_are_unconstrained() {
        let mut draft = valid_draft();
        draft.notes = String::new();
        assert!(validate_booking(&draft).is_empty());
        draft.notes = "Gate code is 4411".into();
        assert!(validate_booking(&draft).is_empty());
    }

    #[test]
    fn contact_rules() {
        let mut request = NewContactRequest {
            first_name: "Alex".into(),
            last_name: "Morgan".into(),
            email: "alex@example.com".into(),
            phone: None,
            service_interest: None,
            message: "Do you service restaurant kitchens?".into(),
        };
        assert!(validate_contact(&request).is_empty());

        request.message = "too short".into();
        let errors = validate_contact(&request);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn collector_side_check_matches_client_table() {
        let new = valid_draft().to_submission();
        assert!(validate_new_booking(&new).is_empty());

        let mut bad = valid_draft();
        bad.first_name = "A".into();
        let new = bad.to_submission();
        assert_eq!(validate_new_booking(&new).len(), 1);
    }
}

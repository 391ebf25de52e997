use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+\-()]{10,15}$").expect("phone pattern"));

pub const SUCCESS_NOTICE: &str =
    "Your message has been sent successfully. We will contact you soon!";
pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    /// Declaration order, which is also the report order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Message,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please select a service")]
    MissingService,
    #[error("Please enter your message")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldResult {
    pub field: Field,
    pub is_valid: bool,
    pub message: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationReport {
    results: Vec<FieldResult>,
}

impl ValidationReport {
    pub fn results(&self) -> &[FieldResult] {
        &self.results
    }

    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|result| result.is_valid)
    }

    pub fn failures(&self) -> Vec<Field> {
        self.results
            .iter()
            .filter(|result| !result.is_valid)
            .map(|result| result.field)
            .collect()
    }

    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.results
            .iter()
            .find(|result| result.field == field)
            .and_then(|result| result.message)
    }
}

fn check(field: Field, value: &str) -> Result<(), ValidationFailure> {
    let trimmed = value.trim();
    match field {
        Field::Name if trimmed.is_empty() => Err(ValidationFailure::MissingName),
        Field::Email if !EMAIL_RE.is_match(trimmed) => Err(ValidationFailure::InvalidEmail),
        Field::Phone if !PHONE_RE.is_match(trimmed) => Err(ValidationFailure::InvalidPhone),
        // a select either has a value or it doesn't, whitespace is a real option
        Field::Service if value.is_empty() => Err(ValidationFailure::MissingService),
        Field::Message if trimmed.is_empty() => Err(ValidationFailure::MissingMessage),
        _ => Ok(()),
    }
}

fn message_of(failure: ValidationFailure) -> &'static str {
    match failure {
        ValidationFailure::MissingName => "Please enter your name",
        ValidationFailure::InvalidEmail => "Please enter a valid email address",
        ValidationFailure::InvalidPhone => "Please enter a valid phone number",
        ValidationFailure::MissingService => "Please select a service",
        ValidationFailure::MissingMessage => "Please enter your message",
    }
}

pub fn validate(form: &ContactForm) -> ValidationReport {
    let results = Field::ALL
        .iter()
        .map(|&field| match check(field, form.value(field)) {
            Ok(()) => FieldResult {
                field,
                is_valid: true,
                message: None,
            },
            Err(failure) => FieldResult {
                field,
                is_valid: false,
                message: Some(message_of(failure)),
            },
        })
        .collect();
    ValidationReport { results }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Sending,
    Sent,
}

/// Follow-up the caller has to schedule on its timer service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Deliver,
    /// Carries the notice it belongs to so a stale timer cannot hide a newer one.
    Dismiss(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub step: Step,
    pub after_ms: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.failures().len())]
    Invalid(ValidationReport),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Simulated send: no transport, only a pending phase and a notice.
#[derive(Debug)]
pub struct SubmissionFlow {
    phase: SubmissionPhase,
    submit_delay_ms: u32,
    notice_ms: u32,
    notices: u32,
}

impl SubmissionFlow {
    pub fn new(submit_delay_ms: u32, notice_ms: u32) -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            submit_delay_ms,
            notice_ms,
            notices: 0,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn trigger_disabled(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }

    pub fn trigger_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Sending => SENDING_LABEL,
            _ => SEND_LABEL,
        }
    }

    pub fn notification(&self) -> Option<&'static str> {
        match self.phase {
            SubmissionPhase::Sent => Some(SUCCESS_NOTICE),
            _ => None,
        }
    }

    pub fn submit(&mut self, form: &ContactForm) -> Result<Scheduled, SubmitError> {
        if self.phase == SubmissionPhase::Sending {
            return Err(SubmitError::InFlight);
        }
        let report = validate(form);
        if !report.is_valid() {
            return Err(SubmitError::Invalid(report));
        }
        self.phase = SubmissionPhase::Sending;
        Ok(Scheduled {
            step: Step::Deliver,
            after_ms: self.submit_delay_ms,
        })
    }

    /// Finishes the pending send. The caller resets the form fields.
    pub fn deliver(&mut self) -> Option<Scheduled> {
        if self.phase != SubmissionPhase::Sending {
            return None;
        }
        self.phase = SubmissionPhase::Sent;
        self.notices = self.notices.wrapping_add(1);
        Some(Scheduled {
            step: Step::Dismiss(self.notices),
            after_ms: self.notice_ms,
        })
    }

    pub fn dismiss(&mut self, notice: u32) {
        if self.phase == SubmissionPhase::Sent && notice == self.notices {
            self.phase = SubmissionPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str, service: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    fn valid_form() -> ContactForm {
        form("Jo", "jo@example.co.uk", "01632 960001", "mot", "Car makes a noise")
    }

    #[test]
    fn test_only_name_fails() {
        let report = validate(&form("", "a@b.co", "1234567890", "x", "hi"));
        assert!(!report.is_valid());
        assert_eq!(report.failures(), vec![Field::Name]);
        assert_eq!(report.message_for(Field::Name), Some("Please enter your name"));
        assert_eq!(report.message_for(Field::Email), None);
    }

    #[test]
    fn test_four_fields_fail() {
        let report = validate(&form("Jo", "bad", "123", "", ""));
        assert_eq!(
            report.failures(),
            vec![Field::Email, Field::Phone, Field::Service, Field::Message]
        );
        assert_eq!(report.results().len(), 5);
        assert!(report.results()[0].is_valid);
    }

    #[test]
    fn test_results_follow_declaration_order() {
        let report = validate(&valid_form());
        assert!(report.is_valid());
        let order: Vec<&str> = report.results().iter().map(|r| r.field.id()).collect();
        assert_eq!(order, vec!["name", "email", "phone", "service", "message"]);
    }

    #[test]
    fn test_whitespace_only_values() {
        let report = validate(&form("   ", " a@b.co ", " 0123456789 ", "x", "\n\t"));
        assert_eq!(report.failures(), vec![Field::Name, Field::Message]);
    }

    #[test]
    fn test_email_rule() {
        for ok in ["a@b.co", "first.last@garage.example.com"] {
            assert!(check(Field::Email, ok).is_ok(), "{}", ok);
        }
        for bad in ["", "a@b", "a b@c.d", "a@@b.c", "@b.co", "a@b."] {
            assert_eq!(check(Field::Email, bad), Err(ValidationFailure::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn test_phone_rule() {
        assert!(check(Field::Phone, "1234567890").is_ok());
        assert!(check(Field::Phone, "+44 7700 900123").is_ok());
        assert!(check(Field::Phone, "(01632) 960-001").is_ok());
        assert!(check(Field::Phone, "123456789").is_err());
        assert!(check(Field::Phone, "1234567890123456").is_err());
        assert!(check(Field::Phone, "07700 9001x3").is_err());
    }

    #[test]
    fn test_failure_messages_match_display() {
        for failure in [
            ValidationFailure::MissingName,
            ValidationFailure::InvalidEmail,
            ValidationFailure::InvalidPhone,
            ValidationFailure::MissingService,
            ValidationFailure::MissingMessage,
        ] {
            assert_eq!(failure.to_string(), message_of(failure));
        }
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut flow = SubmissionFlow::new(1500, 5000);
        let err = flow.submit(&ContactForm::default()).unwrap_err();
        match err {
            SubmitError::Invalid(report) => assert_eq!(report.failures().len(), 5),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert!(!flow.trigger_disabled());
        assert!(flow.submit(&valid_form()).is_ok());
    }

    #[test]
    fn test_submission_timeline() {
        let mut flow = SubmissionFlow::new(1500, 5000);
        let mut clock: u32 = 0;
        let mut queue: Vec<(u32, Step)> = Vec::new();

        let scheduled = flow.submit(&valid_form()).unwrap();
        queue.push((clock + scheduled.after_ms, scheduled.step));
        assert!(flow.trigger_disabled());
        assert_eq!(flow.trigger_label(), SENDING_LABEL);
        assert_eq!(flow.notification(), None);
        assert_eq!(flow.submit(&valid_form()), Err(SubmitError::InFlight));

        while let Some((at, step)) = queue.pop() {
            clock = at;
            match step {
                Step::Deliver => {
                    assert_eq!(clock, 1500);
                    let next = flow.deliver().unwrap();
                    assert_eq!(flow.notification(), Some(SUCCESS_NOTICE));
                    assert!(!flow.trigger_disabled());
                    assert_eq!(flow.trigger_label(), SEND_LABEL);
                    queue.push((clock + next.after_ms, next.step));
                }
                Step::Dismiss(notice) => {
                    assert_eq!(clock, 6500);
                    flow.dismiss(notice);
                }
            }
        }
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert_eq!(flow.notification(), None);
    }

    #[test]
    fn test_deliver_and_dismiss_out_of_phase() {
        let mut flow = SubmissionFlow::new(10, 10);
        assert_eq!(flow.deliver(), None);
        flow.dismiss(0);
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut flow = SubmissionFlow::new(10, 10);
        flow.submit(&valid_form()).unwrap();
        let first = flow.deliver().unwrap();
        flow.submit(&valid_form()).unwrap();
        let second = flow.deliver().unwrap();
        assert_ne!(first.step, second.step);

        if let Step::Dismiss(notice) = first.step {
            flow.dismiss(notice);
        }
        assert_eq!(flow.notification(), Some(SUCCESS_NOTICE));
        if let Step::Dismiss(notice) = second.step {
            flow.dismiss(notice);
        }
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
    }
}

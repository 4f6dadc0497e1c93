use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::content::SERVICE_OPTIONS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    PropertyType,
    Message,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Phone => "Phone Number",
            FormField::PropertyType => "Property Type",
            FormField::Message => "Tell us about your property or project",
        }
    }
}

/// Payload handed to a [`SubmissionGateway`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_type: String,
    pub services: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("We couldn't reach our team right now. Please try again or call us directly.")]
    Unreachable,
    #[error("Too many requests were sent from this device. Please wait a minute and try again.")]
    RateLimited,
    #[error("{0}")]
    Rejected(String),
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Where a finished contact request goes.
pub trait SubmissionGateway {
    fn submit(&self, request: ContactRequest) -> SubmitFuture;
}

/// Stands in for a mail or CRM integration: waits, logs the payload, succeeds.
pub struct SimulatedGateway {
    pub delay_ms: u32,
}

impl SubmissionGateway for SimulatedGateway {
    fn submit(&self, request: ContactRequest) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            match serde_json::to_string(&request) {
                Ok(body) => debug!("Simulated contact submission: {}", body),
                Err(e) => warn!("Could not serialize contact request: {}", e),
            }
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            Ok(())
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_type: String,
    pub services: BTreeSet<String>,
    pub message: String,
    pub submitting: bool,
    pub submitted: bool,
    pub error: Option<String>,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::PropertyType => &mut self.property_type,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::PropertyType => &self.property_type,
            FormField::Message => &self.message,
        }
    }

    pub fn toggle_service(&mut self, service: &str) {
        if !self.services.remove(service) {
            self.services.insert(service.to_string());
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.contains(service)
    }

    pub fn missing_required(&self) -> Vec<FormField> {
        [FormField::Name, FormField::Email]
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.submitted && self.missing_required().is_empty()
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else if self.submitting {
            FormPhase::Submitting
        } else if let Some(message) = &self.error {
            FormPhase::Failed(message.clone())
        } else {
            FormPhase::Editing
        }
    }

    /// Enters `Submitting` and returns the payload to send, or `None` when
    /// the guard rejects the attempt (state is left untouched).
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.request())
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if !self.submitting {
            return;
        }
        self.submitting = false;
        match outcome {
            Ok(()) => self.submitted = true,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Services are listed in chip order, not selection order.
    fn request(&self) -> ContactRequest {
        let mut services: Vec<String> = SERVICE_OPTIONS
            .iter()
            .filter(|s| self.services.contains(**s))
            .map(|s| s.to_string())
            .collect();
        services.extend(
            self.services
                .iter()
                .filter(|s| !SERVICE_OPTIONS.contains(&s.as_str()))
                .cloned(),
        );

        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            property_type: self.property_type.clone(),
            services,
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StubGateway {
        outcome: Result<(), SubmitError>,
        seen: Rc<RefCell<Vec<ContactRequest>>>,
    }

    impl SubmissionGateway for StubGateway {
        fn submit(&self, request: ContactRequest) -> SubmitFuture {
            self.seen.borrow_mut().push(request);
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.set_field(FormField::Name, "Dana Whitfield".to_string());
        form.set_field(FormField::Email, "dana@example.com".to_string());
        form.set_field(FormField::Phone, "555-0100".to_string());
        form.set_field(FormField::PropertyType, "Small Business".to_string());
        form.set_field(FormField::Message, "Two entrances and a loading dock.".to_string());
        form.toggle_service("Free Assessment");
        form.toggle_service("CCTV Installation");
        form
    }

    fn run(form: &mut ContactFormState, gateway: &dyn SubmissionGateway) -> bool {
        match form.begin_submit() {
            Some(request) => {
                let outcome = block_on(gateway.submit(request));
                form.finish_submit(outcome);
                true
            }
            None => false,
        }
    }

    #[test]
    fn submit_is_guarded_by_required_fields_and_in_flight_flag() {
        let mut form = ContactFormState::default();
        form.set_field(FormField::Email, "dana@example.com".to_string());
        let before = form.clone();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form, before);

        let mut form = ContactFormState::default();
        form.set_field(FormField::Name, "Dana".to_string());
        let before = form.clone();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form, before);

        let mut form = filled();
        assert!(form.begin_submit().is_some());
        let in_flight = form.clone();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form, in_flight);
    }

    #[test]
    fn successful_submit_only_flips_flags() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let gateway = StubGateway { outcome: Ok(()), seen: seen.clone() };
        let mut form = filled();
        let before = form.clone();

        assert!(run(&mut form, &gateway));

        assert!(!form.submitting);
        assert!(form.submitted);
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(
            ContactFormState { submitted: false, ..form.clone() },
            before
        );

        let sent = seen.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].services, vec!["CCTV Installation", "Free Assessment"]);
        assert_eq!(sent[0].property_type, "Small Business");
    }

    #[test]
    fn reset_returns_to_empty_defaults() {
        let gateway = StubGateway { outcome: Ok(()), seen: Rc::default() };
        let mut form = filled();
        run(&mut form, &gateway);

        form.reset();
        assert_eq!(form, ContactFormState::default());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(!form.can_submit());
    }

    #[test]
    fn no_second_submit_after_success() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let gateway = StubGateway { outcome: Ok(()), seen: seen.clone() };
        let mut form = filled();
        assert!(run(&mut form, &gateway));
        assert!(!run(&mut form, &gateway));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn failed_submit_keeps_fields_and_allows_retry() {
        let failing = StubGateway { outcome: Err(SubmitError::Unreachable), seen: Rc::default() };
        let mut form = filled();
        let before = form.clone();

        assert!(run(&mut form, &failing));
        assert!(!form.submitting);
        assert!(!form.submitted);
        assert!(matches!(form.phase(), FormPhase::Failed(_)));
        assert_eq!(ContactFormState { error: None, ..form.clone() }, before);

        let working = StubGateway { outcome: Ok(()), seen: Rc::default() };
        assert!(run(&mut form, &working));
        assert_eq!(form.error, None);
        assert!(form.submitted);
    }

    #[test]
    fn failure_message_is_the_error_display_text() {
        let rejected = SubmitError::Rejected("Please include a phone number for on-site visits.".to_string());
        let gateway = StubGateway { outcome: Err(rejected.clone()), seen: Rc::default() };
        let mut form = filled();
        assert!(run(&mut form, &gateway));
        assert_eq!(
            form.phase(),
            FormPhase::Failed("Please include a phone number for on-site visits.".to_string())
        );

        let limited = StubGateway { outcome: Err(SubmitError::RateLimited), seen: Rc::default() };
        assert!(run(&mut form, &limited));
        assert_eq!(form.error, Some(SubmitError::RateLimited.to_string()));
        assert!(form.error.as_deref().unwrap().starts_with("Too many requests"));
    }

    #[test]
    fn toggling_a_service_twice_is_a_no_op() {
        let mut form = filled();
        let before = form.services.clone();
        form.toggle_service("Other");
        assert!(form.has_service("Other"));
        form.toggle_service("Other");
        assert_eq!(form.services, before);

        form.toggle_service("CCTV Installation");
        form.toggle_service("CCTV Installation");
        assert_eq!(form.services, before);
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut form = filled();
        let before = form.clone();
        form.finish_submit(Ok(()));
        assert_eq!(form, before);
    }

    #[test]
    fn missing_required_lists_empty_fields() {
        let mut form = ContactFormState::default();
        assert_eq!(form.missing_required(), vec![FormField::Name, FormField::Email]);
        form.set_field(FormField::Name, "Dana".to_string());
        assert_eq!(form.missing_required(), vec![FormField::Email]);
    }

    #[test]
    fn request_serializes_in_camel_case() {
        let mut form = filled();
        let request = form.begin_submit().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["propertyType"], "Small Business");
        assert_eq!(json["services"][1], "Free Assessment");
    }
}

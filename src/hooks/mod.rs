pub mod use_support_form;

pub use use_support_form::{use_support_form, use_support_form_with_service, SupportFormState};

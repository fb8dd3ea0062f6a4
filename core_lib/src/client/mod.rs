//! Client side of the offer form: form state, submission and user notices

pub mod form;
pub mod submit;

pub use form::LeadForm;
pub use submit::{Notice, SubmissionClient};

//! Offer form state and the constraint checks the form applies before submitting

use crate::models::LeadSubmission;
use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

lazy_static! {
    static ref WEBSITE_REGEX: Regex = Regex::new(
        r"^(?:https?://)?[\w-]+\.[a-zA-Z]{2,63}[/\w-]*/?\??[^#\n\r]*#?[^\n\r]*$"
    ).unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LeadForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    pub company_website: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: String,

    pub description: String,
}

impl LeadForm {
    /// Runs every field check. The website is optional but must look like a URL when given.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !self.company_website.is_empty() && !WEBSITE_REGEX.is_match(&self.company_website) {
            let mut error = ValidationError::new("website");
            error.message = Some("Company website must be a valid URL".into());
            errors.add("company_website", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_submission(&self) -> LeadSubmission {
        LeadSubmission {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            company_name: Some(self.company_name.clone()),
            company_website: Some(self.company_website.clone()),
            email_address: Some(self.email.clone()),
            phone_number: Some(self.phone.clone()),
            property_description: Some(self.description.clone()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub mod lead;
pub mod response;

pub use lead::LeadSubmission;
pub use response::ApiResponse;

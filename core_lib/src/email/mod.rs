//! Notification email formatting and delivery

pub mod dispatcher;
pub mod provider;
pub mod template;

pub use dispatcher::NotificationDispatcher;
pub use provider::{EmailMessage, EmailProvider, ProviderError, ResendProvider};

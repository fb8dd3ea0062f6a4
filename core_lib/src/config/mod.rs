//! Configuration management

pub mod settings;

pub use settings::{AppConfig, CorsConfig, EmailConfig, ServerConfig};

use crate::error::{AppError, Result};
use lazy_static::lazy_static;

lazy_static! {
    static ref SETTINGS: std::result::Result<AppConfig, String> =
        AppConfig::load().map_err(|e| e.to_string());
}

/// Process-wide configuration, loaded on first access and immutable afterwards.
pub fn settings() -> Result<&'static AppConfig> {
    SETTINGS.as_ref().map_err(|e| AppError::Config(e.clone()))
}

/// Serializes tests that read or mutate process environment variables.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_are_loaded_once() {
        let _lock = env_lock();

        let first = settings().expect("Should load process settings");
        let second = settings().expect("Should load process settings");

        assert!(std::ptr::eq(first, second));
        assert!(first.validate().is_ok());
    }
}

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether one extension has been enabled.
///
/// Starts inactive. Enabling is idempotent and may race with lookups.
#[derive(Debug, Default)]
pub struct ExtensionFlag(AtomicBool);

impl ExtensionFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn enable(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_disabled() {
        assert!(!ExtensionFlag::default().is_enabled());
        assert!(!ExtensionFlag::new().is_enabled());
    }

    #[test]
    fn test_enable_is_idempotent() {
        let flag = ExtensionFlag::new();
        flag.enable();
        flag.enable();
        assert!(flag.is_enabled());
    }
}

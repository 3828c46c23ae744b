//! Helpers shared by unit and integration tests.

use crate::config::GraphConfig;

/// Access token used by [`config_for`]
pub const TEST_ACCESS_TOKEN: &str = "test-token";

/// Configuration pointing at a mock server with [`TEST_ACCESS_TOKEN`] set
#[must_use]
pub fn config_for(base: impl Into<String>) -> GraphConfig {
    GraphConfig::new()
        .with_api_base(base)
        .with_access_token(TEST_ACCESS_TOKEN)
}

/// Scoped overrides of process environment variables.
///
/// Every touched variable is put back to its earlier value, or removed, on drop.
/// Callers must hold `#[serial(env)]` since the environment is process-global.
#[derive(Default)]
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Creates a guard that has not touched anything yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `val` until the guard drops
    #[must_use]
    pub fn set(mut self, key: &'static str, val: &str) -> Self {
        self.save(key);
        unsafe { std::env::set_var(key, val) };
        self
    }

    /// Unsets `key` until the guard drops
    #[must_use]
    pub fn unset(mut self, key: &'static str) -> Self {
        self.save(key);
        unsafe { std::env::remove_var(key) };
        self
    }

    fn save(&mut self, key: &'static str) {
        if self.saved.iter().all(|(k, _)| *k != key) {
            self.saved.push((key, std::env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, prev) in self.saved.drain(..).rev() {
            match prev {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

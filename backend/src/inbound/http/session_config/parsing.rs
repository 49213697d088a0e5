//! Boolean toggles read from the environment.

use mockable::Env;
use tracing::warn;

use super::{BuildMode, SessionConfigError};

const ACCEPTED_FLAGS: &str = "1|0|true|false|yes|no|y|n";

/// A boolean environment variable and the value debug builds assume when it
/// is absent or unreadable.
#[derive(Debug, Clone, Copy)]
pub(super) struct Toggle {
    pub(super) name: &'static str,
    pub(super) debug_default: bool,
}

impl Toggle {
    pub(super) const fn new(name: &'static str, debug_default: bool) -> Self {
        Self {
            name,
            debug_default,
        }
    }

    /// Release builds require the variable; debug builds warn and fall back.
    pub(super) fn read<E: Env>(self, env: &E, mode: BuildMode) -> Result<bool, SessionConfigError> {
        let Some(raw) = env.string(self.name) else {
            return self.fallback(mode, SessionConfigError::MissingEnv { name: self.name }, None);
        };
        if let Some(flag) = parse_bool(&raw) {
            return Ok(flag);
        }
        let error = SessionConfigError::InvalidEnv {
            name: self.name,
            value: raw.clone(),
            expected: ACCEPTED_FLAGS,
        };
        self.fallback(mode, error, Some(&raw))
    }

    fn fallback(
        self,
        mode: BuildMode,
        error: SessionConfigError,
        rejected: Option<&str>,
    ) -> Result<bool, SessionConfigError> {
        if !mode.is_debug() {
            return Err(error);
        }
        match rejected {
            Some(value) => warn!(
                variable = self.name,
                value,
                fallback = self.debug_default,
                "unrecognised session toggle"
            ),
            None => warn!(
                variable = self.name,
                fallback = self.debug_default,
                "session toggle not set"
            ),
        }
        Ok(self.debug_default)
    }
}

pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

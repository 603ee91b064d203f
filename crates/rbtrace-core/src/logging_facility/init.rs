//! Subscriber installation for the rbtrace binaries
//!
//! Lifecycle events from `apply` log at `info`; per-snapshot and per-step
//! detail from the tree and recorder logs at `debug`. The profile picks how
//! much of that is shown and in which format.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// How events are rendered and filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Plain text including every recorded snapshot
    Development,
    /// One JSON object per lifecycle event
    Production,
    /// Nothing is printed; tests install [`super::init_test_capture`] instead
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    pub fn default_directive(self) -> Option<&'static str> {
        match self {
            Profile::Development => Some("rbtrace=debug"),
            Profile::Production => Some("rbtrace=info"),
            Profile::Test => None,
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect, and it leaves an already installed
/// global subscriber (such as the test capture) in place. Output goes to
/// stderr; the CLI keeps stdout for operation records.
///
/// ```
/// use rbtrace_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match (profile, profile.default_directive()) {
            (Profile::Development, Some(directive)) => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(directive))
                .try_init()
                .is_ok(),
            (Profile::Production, Some(directive)) => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(directive))
                .try_init()
                .is_ok(),
            _ => tracing_subscriber::registry().try_init().is_ok(),
        };
        if !installed {
            tracing::debug!(
                component = module_path!(),
                "global subscriber already set; keeping it"
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Development);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(Profile::Development.default_directive(), Some("rbtrace=debug"));
        assert_eq!(Profile::Production.default_directive(), Some("rbtrace=info"));
        assert_eq!(Profile::Test.default_directive(), None);
    }
}

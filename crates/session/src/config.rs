use marvel_core::form::SubmitPolicy;

/// Behavior switches for a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// What happens to the form when a submit fails.
    pub submit_policy: SubmitPolicy,
}

impl SessionConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default                |
    /// |-----------------|------------------------|
    /// | `SUBMIT_POLICY` | `keep_open_on_failure` |
    pub fn from_env() -> Self {
        let submit_policy = std::env::var("SUBMIT_POLICY")
            .map(|raw| {
                raw.parse::<SubmitPolicy>()
                    .expect("SUBMIT_POLICY must be keep_open_on_failure or close_always")
            })
            .unwrap_or_default();

        Self { submit_policy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_form_open_on_failure() {
        let config = SessionConfig::default();
        assert_eq!(config.submit_policy, SubmitPolicy::KeepOpenOnFailure);
        assert!(!config.submit_policy.closes_form(false));
    }
}

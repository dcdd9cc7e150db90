//! Bypass Policy
//!
//! Promotes pre-approved strings to Trusted Types without sanitizing them,
//! falling back to plain strings when no policy can be created.
//!
//! # Security
//! Only strings that are already known to be safe for the target sink may be
//! passed through here. The policy performs no sanitization of its own.

use super::trusted_types::{
    TrustedHtml, TrustedOrPlain, TrustedScript, TrustedScriptUrl, TrustedTypePolicy,
    TrustedTypePolicyFactory,
};
use crate::config::{TrustedTypesConfig, DEFAULT_POLICY_NAME};
use log::warn;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Lazily created bypass policy.
///
/// The policy is created on the first promotion and never retried: a failed
/// creation leaves the handle permanently handing out plain strings.
pub struct TrustedTypesHandle {
    policy_name: String,
    factory: Option<Arc<dyn TrustedTypePolicyFactory>>,
    policy: OnceLock<Option<Box<dyn TrustedTypePolicy>>>,
}

impl TrustedTypesHandle {
    pub fn new(
        policy_name: impl Into<String>,
        factory: Arc<dyn TrustedTypePolicyFactory>,
    ) -> Self {
        Self {
            policy_name: policy_name.into(),
            factory: Some(factory),
            policy: OnceLock::new(),
        }
    }

    /// A handle for environments without Trusted Types.
    pub fn unavailable() -> Self {
        Self {
            policy_name: DEFAULT_POLICY_NAME.to_string(),
            factory: None,
            policy: OnceLock::new(),
        }
    }

    pub fn from_config(
        config: &TrustedTypesConfig,
        factory: Arc<dyn TrustedTypePolicyFactory>,
    ) -> Self {
        if config.enabled {
            Self::new(config.policy_name.clone(), factory)
        } else {
            Self::unavailable()
        }
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    /// Returns the policy, creating it on first use.
    fn get_policy(&self) -> Option<&dyn TrustedTypePolicy> {
        self.policy
            .get_or_init(|| {
                let factory = self.factory.as_ref()?;
                match factory.create_policy(&self.policy_name) {
                    Ok(policy) => Some(policy),
                    Err(error) => {
                        // Typically a second policy with the same name in this process.
                        warn!(
                            "Trusted Types policy \"{}\" is unavailable, using plain strings: {}",
                            self.policy_name, error
                        );
                        None
                    }
                }
            })
            .as_deref()
    }

    fn promote<T>(
        &self,
        raw: &str,
        create: impl FnOnce(&dyn TrustedTypePolicy, &str) -> String,
        wrap: impl FnOnce(String) -> T,
    ) -> TrustedOrPlain<T> {
        match self.get_policy() {
            Some(policy) => {
                let value = create(policy, raw);
                // An empty result is treated like a rejection and the input is kept.
                if value.is_empty() {
                    TrustedOrPlain::Plain(raw.to_string())
                } else {
                    TrustedOrPlain::Trusted(wrap(value))
                }
            }
            None => TrustedOrPlain::Plain(raw.to_string()),
        }
    }

    /// Unsafely promote a string to a TrustedHTML, falling back to strings when
    /// Trusted Types are not available.
    pub fn to_trusted_html(&self, html: &str) -> TrustedOrPlain<TrustedHtml> {
        self.promote(html, |policy, s| policy.create_html(s), TrustedHtml::new)
    }

    /// Unsafely promote a string to a TrustedScript, falling back to strings
    /// when Trusted Types are not available.
    pub fn to_trusted_script(&self, script: &str) -> TrustedOrPlain<TrustedScript> {
        self.promote(
            script,
            |policy, s| policy.create_script(s),
            TrustedScript::new,
        )
    }

    /// Unsafely promote a string to a TrustedScriptURL, falling back to strings
    /// when Trusted Types are not available.
    pub fn to_trusted_script_url(&self, url: &str) -> TrustedOrPlain<TrustedScriptUrl> {
        self.promote(
            url,
            |policy, s| policy.create_script_url(s),
            TrustedScriptUrl::new,
        )
    }
}

impl fmt::Debug for TrustedTypesHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustedTypesHandle")
            .field("policy_name", &self.policy_name)
            .field("has_factory", &self.factory.is_some())
            .field("initialized", &self.policy.get().is_some())
            .finish()
    }
}

//! Trusted Types
//!
//! Value types and policy traits mirroring the Trusted Types API.
//!
//! While Angular only uses Trusted Types internally for the time being,
//! references to Trusted Types could leak into our core API.

use crate::error::PolicyCreationError;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Policy names allowed by the `trusted-types` CSP directive.
static POLICY_NAME_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-#a-zA-Z0-9=_/@.%]+$").expect("valid policy name pattern"));

/// Names of the policies created so far in this process, in creation order.
static REGISTERED_POLICIES: Lazy<Mutex<IndexSet<String>>> =
    Lazy::new(|| Mutex::new(IndexSet::new()));

pub fn is_valid_policy_name(name: &str) -> bool {
    POLICY_NAME_REGEXP.is_match(name)
}

macro_rules! trusted_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub(crate) fn new(value: String) -> Self {
                $name(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

trusted_value!(
    /// Markup that has been marked as safe to assign to an HTML sink.
    TrustedHtml
);
trusted_value!(
    /// Source text that has been marked as safe to evaluate.
    TrustedScript
);
trusted_value!(
    /// URL that has been marked as safe to load a script from.
    TrustedScriptUrl
);

/// Result of promoting a string: trust-marked when a policy is available,
/// otherwise the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrustedOrPlain<T> {
    Trusted(T),
    Plain(String),
}

impl<T: AsRef<str>> TrustedOrPlain<T> {
    pub fn as_str(&self) -> &str {
        match self {
            TrustedOrPlain::Trusted(value) => value.as_ref(),
            TrustedOrPlain::Plain(value) => value,
        }
    }
}

impl<T: AsRef<str>> fmt::Display for TrustedOrPlain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trusted Type Policy interface.
///
/// Each method returns the transformed input. An empty result means the
/// policy produced nothing usable.
pub trait TrustedTypePolicy: Send + Sync {
    fn create_html(&self, input: &str) -> String;
    fn create_script(&self, input: &str) -> String;
    fn create_script_url(&self, input: &str) -> String;
}

/// Trusted Type Policy Factory interface
pub trait TrustedTypePolicyFactory: Send + Sync {
    fn create_policy(
        &self,
        policy_name: &str,
    ) -> Result<Box<dyn TrustedTypePolicy>, PolicyCreationError>;
}

/// Policy that passes strings through unchanged.
struct PassthroughPolicy;

impl TrustedTypePolicy for PassthroughPolicy {
    fn create_html(&self, input: &str) -> String {
        input.to_string()
    }

    fn create_script(&self, input: &str) -> String {
        input.to_string()
    }

    fn create_script_url(&self, input: &str) -> String {
        input.to_string()
    }
}

/// Creates identity policies and refuses a second policy with the same name
/// in the same process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughPolicyFactory;

impl PassthroughPolicyFactory {
    /// Names of every policy this factory has created in the process.
    pub fn registered_policy_names() -> Vec<String> {
        REGISTERED_POLICIES
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl TrustedTypePolicyFactory for PassthroughPolicyFactory {
    fn create_policy(
        &self,
        policy_name: &str,
    ) -> Result<Box<dyn TrustedTypePolicy>, PolicyCreationError> {
        if !is_valid_policy_name(policy_name) {
            return Err(PolicyCreationError::InvalidName(policy_name.to_string()));
        }
        let mut registered = REGISTERED_POLICIES
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !registered.insert(policy_name.to_string()) {
            return Err(PolicyCreationError::Duplicate(policy_name.to_string()));
        }
        Ok(Box::new(PassthroughPolicy))
    }
}

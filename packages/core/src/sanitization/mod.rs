//! Sanitization Module
//!
//! Trusted Types support for sinks that take markup, script or script URLs.

pub mod bypass;
pub mod trusted_types;

pub use bypass::TrustedTypesHandle;
pub use trusted_types::{
    PassthroughPolicyFactory, TrustedHtml, TrustedOrPlain, TrustedScript, TrustedScriptUrl,
    TrustedTypePolicy, TrustedTypePolicyFactory,
};

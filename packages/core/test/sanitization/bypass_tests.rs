//! Bypass Policy Tests
//!
//! Each test uses its own policy name since created policies are registered
//! for the whole test process.

use angular_core::sanitization::{PassthroughPolicyFactory, TrustedOrPlain, TrustedTypesHandle};
use angular_core::TrustedTypesConfig;
use std::sync::Arc;

fn handle(policy_name: &str) -> TrustedTypesHandle {
    TrustedTypesHandle::new(policy_name, Arc::new(PassthroughPolicyFactory))
}

#[test]
fn should_mark_strings_as_trusted_when_policy_is_available() {
    let handle = handle("bypass-test#available");

    let html = handle.to_trusted_html("<b>bold</b>");
    assert!(matches!(html, TrustedOrPlain::Trusted(_)));
    assert_eq!(html.as_str(), "<b>bold</b>");

    let script = handle.to_trusted_script("console.log(1)");
    assert!(matches!(script, TrustedOrPlain::Trusted(_)));
    assert_eq!(script.as_str(), "console.log(1)");

    let url = handle.to_trusted_script_url("https://example.com/app.js");
    assert!(matches!(url, TrustedOrPlain::Trusted(_)));
    assert_eq!(url.as_str(), "https://example.com/app.js");
}

#[test]
fn should_return_equal_values_for_repeated_calls() {
    let handle = handle("bypass-test#repeated");
    assert_eq!(handle.to_trusted_html("<p>"), handle.to_trusted_html("<p>"));

    let unavailable = TrustedTypesHandle::unavailable();
    assert_eq!(
        unavailable.to_trusted_html("<p>"),
        unavailable.to_trusted_html("<p>")
    );
}

#[test]
fn should_return_raw_input_when_unavailable() {
    let handle = TrustedTypesHandle::unavailable();
    assert_eq!(
        handle.to_trusted_html("<img src=x>"),
        TrustedOrPlain::Plain("<img src=x>".to_string())
    );
    assert_eq!(
        handle.to_trusted_script("1 + 1"),
        TrustedOrPlain::Plain("1 + 1".to_string())
    );
    assert_eq!(
        handle.to_trusted_script_url("/x.js"),
        TrustedOrPlain::Plain("/x.js".to_string())
    );
}

#[test]
fn should_return_empty_input_unchanged() {
    let handle = handle("bypass-test#empty");
    let empty = handle.to_trusted_html("");
    assert_eq!(empty, TrustedOrPlain::Plain(String::new()));
    // The empty string does not poison the policy for later calls.
    assert!(matches!(handle.to_trusted_html("<i>"), TrustedOrPlain::Trusted(_)));
}

#[test]
fn should_swallow_duplicate_policy_conflict() {
    let first = handle("bypass-test#duplicate");
    let second = handle("bypass-test#duplicate");

    assert!(matches!(first.to_trusted_script("a()"), TrustedOrPlain::Trusted(_)));
    assert_eq!(
        second.to_trusted_script("a()"),
        TrustedOrPlain::Plain("a()".to_string())
    );
    assert_eq!(
        first.to_trusted_script("a()").as_str(),
        second.to_trusted_script("a()").as_str()
    );
}

#[test]
fn should_register_policy_name_on_first_use_only() {
    let name = "bypass-test#first-use";
    let handle = handle(name);
    assert!(!PassthroughPolicyFactory::registered_policy_names().contains(&name.to_string()));

    handle.to_trusted_html("x");
    assert!(PassthroughPolicyFactory::registered_policy_names().contains(&name.to_string()));
}

#[test]
fn should_share_one_policy_across_threads() {
    let handle = Arc::new(handle("bypass-test#threads"));
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let handle = Arc::clone(&handle);
            std::thread::spawn(move || handle.to_trusted_html(&format!("<p>{}</p>", i)))
        })
        .collect();

    for worker in workers {
        assert!(matches!(worker.join().unwrap(), TrustedOrPlain::Trusted(_)));
    }
}

#[test]
fn should_build_handle_from_config() {
    let enabled = TrustedTypesConfig {
        enabled: true,
        policy_name: "bypass-test#config".to_string(),
    };
    let handle = TrustedTypesHandle::from_config(&enabled, Arc::new(PassthroughPolicyFactory));
    assert_eq!(handle.policy_name(), "bypass-test#config");
    assert!(matches!(handle.to_trusted_html("a"), TrustedOrPlain::Trusted(_)));

    let disabled = TrustedTypesConfig {
        enabled: false,
        policy_name: "bypass-test#disabled".to_string(),
    };
    let handle = TrustedTypesHandle::from_config(&disabled, Arc::new(PassthroughPolicyFactory));
    assert_eq!(
        handle.to_trusted_html("a"),
        TrustedOrPlain::Plain("a".to_string())
    );
}

//! Property tests for setting parsers and collector selection.

use agent_config::services::{
    determine_collector_host, determine_region, parse_app_names, parse_labels, parse_port,
};
use agent_config::RawValue;
use proptest::prelude::*;

proptest! {
    /// Property: a region prefix is recovered from any `<prefix>x<rest>` key
    /// whose prefix has no `x`.
    #[test]
    fn prop_region_prefix_recovered(
        prefix in "[a-w0-9]{1,8}",
        rest in "[A-Za-z0-9]{0,32}"
    ) {
        let key = format!("{prefix}x{rest}");
        prop_assert_eq!(determine_region(Some(key.as_str())), Some(prefix.clone()));

        let (host, region) = determine_collector_host(None, Some(key.as_str()));
        prop_assert_eq!(host, format!("collector.{prefix}.nr-data.net"));
        prop_assert_eq!(region, Some(prefix));
    }

    /// Property: keys without an `x` carry no region.
    #[test]
    fn prop_no_x_means_no_region(key in "[a-wyzA-Z0-9]{0,40}") {
        prop_assert_eq!(determine_region(Some(key.as_str())), None);
    }

    /// Property: an explicit host always bypasses region routing.
    #[test]
    fn prop_host_override_wins(
        host in "[a-z]{1,10}\\.example\\.com",
        key in "[a-z0-9]{1,40}"
    ) {
        let (resolved, region) = determine_collector_host(Some(host.as_str()), Some(key.as_str()));
        prop_assert_eq!(resolved, host);
        prop_assert_eq!(region, None);
    }

    /// Property: every in-range port parses from both representations.
    #[test]
    fn prop_ports_parse(port in 0u16..=u16::MAX) {
        prop_assert_eq!(parse_port(&RawValue::Integer(i64::from(port))).unwrap(), port);
        prop_assert_eq!(parse_port(&RawValue::Text(port.to_string())).unwrap(), port);
    }

    /// Property: alphabetic strings are never ports.
    #[test]
    fn prop_alpha_ports_fail(text in "[a-zA-Z]{1,10}") {
        prop_assert!(parse_port(&RawValue::Text(text)).is_err());
    }

    /// Property: labels pair up, dropping a trailing unpaired token.
    #[test]
    fn prop_labels_pair_tokens(tokens in proptest::collection::vec("[a-z0-9]{1,6}", 0..10)) {
        let input = tokens.join(";");
        let labels = parse_labels(Some(input.as_str()));

        prop_assert_eq!(labels.len(), tokens.len() / 2);
        for (i, label) in labels.iter().enumerate() {
            prop_assert_eq!(&label.key, &tokens[2 * i]);
            prop_assert_eq!(&label.value, &tokens[2 * i + 1]);
        }
    }

    /// Property: app names split on every `;` and come back trimmed.
    #[test]
    fn prop_app_names_trimmed(names in proptest::collection::vec("[a-z]{1,8}", 1..6)) {
        let input = names.iter().map(|n| format!("  {n} ")).collect::<Vec<_>>().join(";");
        prop_assert_eq!(parse_app_names(Some(input.as_str())), Some(names));
    }
}

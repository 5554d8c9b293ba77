//! Domain separator bytes are part of every stored digest; they must not drift.

use std::collections::BTreeSet;

use pathfinder_kernel::proof::hash::canonical_hash;
use pathfinder_kernel::proof::hash_domain::HashDomain;

#[test]
fn domain_bytes_are_locked() {
    let expected: [(HashDomain, &[u8]); 4] = [
        (HashDomain::GridLayout, b"PATHFINDER::GRID_LAYOUT::V1\0"),
        (HashDomain::TraceEvents, b"PATHFINDER::TRACE_EVENTS::V1\0"),
        (HashDomain::SearchPolicy, b"PATHFINDER::SEARCH_POLICY::V1\0"),
        (HashDomain::RunReport, b"PATHFINDER::RUN_REPORT::V1\0"),
    ];
    assert_eq!(HashDomain::ALL.len(), expected.len());
    for (domain, bytes) in expected {
        assert_eq!(domain.as_bytes(), bytes, "{domain}");
    }
}

#[test]
fn domains_share_prefix_and_version() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"PATHFINDER::"), "{domain}");
        assert!(bytes.ends_with(b"::V1\0"), "{domain}");
        assert_eq!(
            bytes.iter().filter(|&&b| b == 0).count(),
            1,
            "{domain} has an interior NUL"
        );
    }
}

#[test]
fn same_payload_differs_per_domain() {
    let payload = br#"{"k":1}"#;
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|&domain| canonical_hash(domain, payload).as_str().to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}

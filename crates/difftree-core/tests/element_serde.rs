// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON shape of elements and policies (the CLI's wire format).

#![allow(missing_docs)]
#![allow(clippy::expect_used)]
use difftree_core::{normalize, DifferentialElement, ReopenPolicy};
use serde_json::{json, Value};

#[test]
fn missing_payload_and_synthetic_fields_default() {
    let parsed: Vec<DifferentialElement<Value>> = serde_json::from_value(json!([
        { "path": "Patient" },
        { "path": "Patient.name.given", "payload": { "min": 1 } }
    ]))
    .expect("parse");
    assert_eq!(parsed[0].payload, None);
    assert!(!parsed[0].synthetic);
    assert_eq!(parsed[1].payload, Some(json!({ "min": 1 })));
}

#[test]
fn null_payload_reads_as_absent() {
    let parsed: Vec<DifferentialElement<Value>> = serde_json::from_value(json!([
        { "path": "Patient", "payload": null },
        { "path": "Patient.name" }
    ]))
    .expect("parse");
    assert_eq!(parsed[0].payload, parsed[1].payload);
    assert_eq!(parsed[0].payload, None);
    assert_eq!(
        serde_json::to_value(&parsed[1]).expect("serialize"),
        json!({ "path": "Patient.name", "payload": null, "synthetic": false })
    );
}

#[test]
fn normalized_output_serializes_synthetic_flag() {
    let input = vec![
        DifferentialElement::new("Patient", json!("root")),
        DifferentialElement::new("Patient.name.given", json!({ "max": "*" })),
    ];
    let out = normalize(&input).expect("normalize");
    let value = serde_json::to_value(&out).expect("serialize");
    assert_eq!(
        value,
        json!([
            { "path": "Patient", "payload": "root", "synthetic": false },
            { "path": "Patient.name", "payload": null, "synthetic": true },
            { "path": "Patient.name.given", "payload": { "max": "*" }, "synthetic": false }
        ])
    );
}

#[test]
fn reopen_policy_uses_snake_case() {
    assert_eq!(
        serde_json::to_value(ReopenPolicy::Reject).expect("serialize"),
        json!("reject")
    );
    let parsed: ReopenPolicy = serde_json::from_value(json!("allow")).expect("parse");
    assert_eq!(parsed, ReopenPolicy::Allow);
}

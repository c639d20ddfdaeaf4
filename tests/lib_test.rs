//! Library integration tests.

use agent_report::baseline::{parse_baseline, WarningKind};
use agent_report::inventory::{parse_inventory, ParameterSet};
use agent_report::report::{
    build_report, extract_version, render_html, status_class, version_class, CellClass, Escaping,
};
use agent_report::ReportError;
use std::path::Path;

#[test]
fn error_types_are_public() {
    let err = ReportError::EmptyInventory {
        path: "report.yaml".into(),
    };
    assert!(err.to_string().contains("report.yaml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> agent_report::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn baseline_line_properties() {
    let load = parse_baseline("p: 1.5\nno colon here\na:b:c\n");
    assert_eq!(load.table.get("p"), Some(1.5));
    assert_eq!(load.table.len(), 1);
    assert_eq!(load.warnings.len(), 2);
    assert!(load
        .warnings
        .iter()
        .all(|w| w.kind == WarningKind::MalformedLine));
}

#[test]
fn classification_properties() {
    assert_eq!(extract_version("Agent v2.10 running"), Some(2.10));
    assert_eq!(extract_version("unknown"), None);

    assert_eq!(status_class("Inactive"), CellClass::Inactive);
    assert_eq!(status_class("Running fine"), CellClass::Running);
    assert_eq!(status_class("Active"), CellClass::Running);
    assert_eq!(status_class("unknown"), CellClass::Neutral);

    let table = parse_baseline("agent_version: 2.0").table;
    assert_eq!(version_class("agent_version", "v2.5", &table), CellClass::VersionGood);
    assert_eq!(version_class("agent_version", "v1.9", &table), CellClass::VersionBad);
    assert_eq!(version_class("agent_version", "n/a", &table), CellClass::Neutral);
}

#[test]
fn union_and_first_host_rows_differ() {
    let inventory = parse_inventory(
        "a:\n  svc_status: Running\nb:\n  svc_status: Running\n  agent_version: '1.0'\n",
        Path::new("report.yaml"),
    )
    .unwrap();
    let table = parse_baseline("agent_version: 2.0").table;

    let first = build_report(&inventory, &table, ParameterSet::FirstHost);
    let union = build_report(&inventory, &table, ParameterSet::Union);
    assert_eq!(first.rows.len(), 1);
    assert_eq!(union.rows.len(), 2);

    let html = render_html(&union, Escaping::Raw);
    assert!(html.contains("<tr><td>agent_version</td><td>2.0</td><td class=''>N/A</td><td class='version-bad'>1.0</td></tr>"));
}

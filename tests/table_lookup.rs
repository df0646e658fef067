//! Integration tests for the built-in Earl Grey metadata table.
//!
//! These tests exercise the public lookup API the way a diagram renderer
//! would: walking every key, fetching records, and handling missing keys.

use chipmeta::core::metadata::MetadataRecord;
use chipmeta::core::table::{ComponentMetadataTable, TableError};
use chipmeta::core::verify::verify_table;

const EXPECTED_KEYS: [&str; 40] = [
    "opentitan-logo",
    "high-speed-crossbar",
    "ibex",
    "interrupt-controller",
    "debug-module",
    "rom",
    "main-sram",
    "key-manager",
    "otbn",
    "aes",
    "kmac",
    "hmac",
    "flash",
    "edn",
    "csrng",
    "entropy-source",
    "spi-host-0",
    "spi-host-1",
    "usb",
    "peripheral-crossbar",
    "otp-fuse-controller",
    "life-cycle",
    "alert-handler",
    "uart",
    "timers",
    "gpio",
    "i2c",
    "spi-device",
    "pattern-generators",
    "pwm",
    "retention-sram",
    "power-manager",
    "sysrst-controller",
    "aon-timers",
    "clkrst-managers",
    "pinmux-padctrl",
    "adc-controller",
    "sensor-control",
    "analog-sensor-top",
    "padding",
];

fn table() -> &'static ComponentMetadataTable {
    ComponentMetadataTable::earlgrey()
}

// =============================================================================
// Keys
// =============================================================================

#[test]
fn keys_are_exactly_the_diagram_nodes_in_order() {
    let keys: Vec<&str> = table().keys().collect();
    assert_eq!(keys, EXPECTED_KEYS);
}

#[test]
fn every_key_has_non_empty_title() {
    for key in table().keys() {
        let record = table().get(key).unwrap();
        assert!(!record.title().is_empty(), "{key} has an empty title");
    }
}

// =============================================================================
// Lookups
// =============================================================================

#[test]
fn ibex_record() {
    let expected = MetadataRecord::new("ibex")
        .unwrap()
        .with_metrics("rv_core_ibex")
        .with_href("/hw/ip/rv_core_ibex#top");

    assert_eq!(table().get("ibex").unwrap(), &expected);
}

#[test]
fn padding_has_link_but_no_metrics_or_report() {
    let padding = table().get("padding").unwrap();

    assert_eq!(padding.title(), "padding");
    assert_eq!(padding.metrics(), None);
    assert_eq!(padding.report(), None);
    assert_eq!(
        padding.href(),
        Some("/hw/top_earlgrey/ip/pinmux/doc/autogen/pinout_asic/")
    );
}

#[test]
fn opentitan_logo_links_home() {
    let logo = table().get("opentitan-logo").unwrap();

    assert_eq!(logo, &MetadataRecord::new("opentitan").unwrap().with_href("/"));
}

#[test]
fn crossbars_share_metrics_but_not_reports() {
    let high = table().get("high-speed-crossbar").unwrap();
    let peri = table().get("peripheral-crossbar").unwrap();

    assert_eq!(high.metrics(), Some("tlul"));
    assert_eq!(peri.metrics(), Some("tlul"));
    assert_eq!(
        high.report(),
        Some("/hw/top_earlgrey/ip/xbar_main/dv/autogen")
    );
    assert_eq!(
        peri.report(),
        Some("/hw/top_earlgrey/ip/xbar_peri/dv/autogen")
    );
}

#[test]
fn nodes_without_reports() {
    let without: Vec<&str> = table()
        .iter()
        .filter(|(_, record)| record.report().is_none())
        .map(|(key, _)| key.as_str())
        .collect();

    assert_eq!(
        without,
        vec![
            "opentitan-logo",
            "ibex",
            "interrupt-controller",
            "pinmux-padctrl",
            "sensor-control",
            "analog-sensor-top",
            "padding",
        ]
    );
}

#[test]
fn missing_key_is_not_found() {
    assert_eq!(
        table().get("nonexistent-key"),
        Err(TableError::KeyNotFound("nonexistent-key".to_string()))
    );
}

#[test]
fn repeated_lookups_are_equal() {
    for key in ["aes", "flash", "padding", "opentitan-logo"] {
        let first = table().get(key).unwrap().clone();
        let second = table().get(key).unwrap().clone();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Sharing and persistence
// =============================================================================

#[test]
fn concurrent_readers_see_same_table() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let table = ComponentMetadataTable::earlgrey();
                (table.len(), table.fingerprint())
            })
        })
        .collect();

    let expected = (EXPECTED_KEYS.len(), table().fingerprint());
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn exported_json_matches_wire_format() {
    let json = table().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["ibex"],
        serde_json::json!({
            "title": "ibex",
            "metrics": "rv_core_ibex",
            "href": "/hw/ip/rv_core_ibex#top",
            "report": null,
        })
    );
    assert!(value["opentitan-logo"].get("metrics").is_none());
}

#[test]
fn exported_json_loads_back() {
    let json = table().to_json_pretty().unwrap();
    let loaded = ComponentMetadataTable::from_json(&json).unwrap();

    assert_eq!(&loaded, table());
    assert!(verify_table(&loaded).ok);
}

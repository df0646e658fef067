//! core::earlgrey
//!
//! Built-in metadata for the Earl Grey top-level block diagram.
//!
//! Rows are listed in diagram definition order. Keys are referenced
//! verbatim by the diagram asset and must not be renamed.

/// One row of a compiled-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub metrics: Option<&'static str>,
    pub href: Option<&'static str>,
    pub report: Option<&'static str>,
}

/// Number of nodes on the Earl Grey diagram.
pub const EARLGREY_LEN: usize = 40;

/// Earl Grey node metadata.
pub const EARLGREY: [BuiltinEntry; EARLGREY_LEN] = [
    BuiltinEntry {
        key: "opentitan-logo",
        title: "opentitan",
        metrics: None,
        href: Some("/"),
        report: None,
    },
    BuiltinEntry {
        key: "high-speed-crossbar",
        title: "high-speed-crossbar",
        metrics: Some("tlul"),
        href: Some("/hw/ip/tlul#top"),
        report: Some("/hw/top_earlgrey/ip/xbar_main/dv/autogen"),
    },
    BuiltinEntry {
        key: "ibex",
        title: "ibex",
        metrics: Some("rv_core_ibex"),
        href: Some("/hw/ip/rv_core_ibex#top"),
        report: None,
    },
    BuiltinEntry {
        key: "interrupt-controller",
        title: "interrupt-controller",
        metrics: Some("rv_plic"),
        href: Some("/hw/top_earlgrey/ip_autogen/rv_plic#top"),
        report: None,
    },
    BuiltinEntry {
        key: "debug-module",
        title: "debug-module",
        metrics: Some("rv_dm"),
        href: Some("/hw/ip/rv_dm#top"),
        report: Some("/hw/ip/rv_dm/dv"),
    },
    BuiltinEntry {
        key: "rom",
        title: "rom",
        metrics: Some("rom_ctrl"),
        href: Some("/hw/ip/rom_ctrl#top"),
        report: Some("/hw/ip/rom_ctrl/dv"),
    },
    BuiltinEntry {
        key: "main-sram",
        title: "main-sram",
        metrics: Some("sram_ctrl"),
        href: Some("/hw/ip/sram_ctrl#top"),
        report: Some("/hw/ip/sram_ctrl_main/dv"),
    },
    BuiltinEntry {
        key: "key-manager",
        title: "key-manager",
        metrics: Some("keymgr"),
        href: Some("/hw/ip/keymgr#top"),
        report: Some("/hw/ip/keymgr/dv"),
    },
    BuiltinEntry {
        key: "otbn",
        title: "otbn",
        metrics: Some("otbn"),
        href: Some("/hw/ip/otbn#top"),
        report: Some("/hw/ip/otbn/dv/uvm"),
    },
    BuiltinEntry {
        key: "aes",
        title: "aes",
        metrics: Some("aes"),
        href: Some("/hw/ip/aes#top"),
        report: Some("/hw/ip/aes_unmasked/dv"),
    },
    BuiltinEntry {
        key: "kmac",
        title: "kmac",
        metrics: Some("kmac"),
        href: Some("/hw/ip/kmac#top"),
        report: Some("/hw/ip/kmac_unmasked/dv"),
    },
    BuiltinEntry {
        key: "hmac",
        title: "hmac",
        metrics: Some("hmac"),
        href: Some("/hw/ip/hmac#top"),
        report: Some("/hw/ip/hmac/dv"),
    },
    BuiltinEntry {
        key: "flash",
        title: "flash",
        metrics: Some("flash_ctrl"),
        href: Some("/hw/ip/flash_ctrl#top"),
        report: Some("/hw/ip/flash_ctrl/dv"),
    },
    BuiltinEntry {
        key: "edn",
        title: "edn",
        metrics: Some("edn"),
        href: Some("/hw/ip/edn#top"),
        report: Some("/hw/ip/edn/dv"),
    },
    BuiltinEntry {
        key: "csrng",
        title: "csrng",
        metrics: Some("csrng"),
        href: Some("/hw/ip/csrng#top"),
        report: Some("/hw/ip/csrng/dv"),
    },
    BuiltinEntry {
        key: "entropy-source",
        title: "entropy-source",
        metrics: Some("entropy_src"),
        href: Some("/hw/ip/entropy_src#top"),
        report: Some("/hw/ip/entropy_src/dv"),
    },
    BuiltinEntry {
        key: "spi-host-0",
        title: "spi-host",
        metrics: Some("spi_host"),
        href: Some("/hw/ip/spi_host#top"),
        report: Some("/hw/ip/spi_host/dv"),
    },
    BuiltinEntry {
        key: "spi-host-1",
        title: "spi-host",
        metrics: Some("spi_host"),
        href: Some("/hw/ip/spi_host#top"),
        report: Some("/hw/ip/spi_host/dv"),
    },
    BuiltinEntry {
        key: "usb",
        title: "usb",
        metrics: Some("usbdev"),
        href: Some("/hw/ip/usbdev#top"),
        report: Some("/hw/ip/usbdev/dv"),
    },
    BuiltinEntry {
        key: "peripheral-crossbar",
        title: "peripheral-crossbar",
        metrics: Some("tlul"),
        href: Some("/hw/ip/tlul#top"),
        report: Some("/hw/top_earlgrey/ip/xbar_peri/dv/autogen"),
    },
    BuiltinEntry {
        key: "otp-fuse-controller",
        title: "otp-fuse-controller",
        metrics: Some("otp_ctrl"),
        href: Some("/hw/ip/otp_ctrl#top"),
        report: Some("/hw/ip/otp_ctrl/dv"),
    },
    BuiltinEntry {
        key: "life-cycle",
        title: "life-cycle",
        metrics: Some("lc_ctrl"),
        href: Some("/hw/ip/lc_ctrl#top"),
        report: Some("/hw/ip/lc_ctrl/dv"),
    },
    BuiltinEntry {
        key: "alert-handler",
        title: "alert-handler",
        metrics: Some("alert_handler"),
        href: Some("/hw/top_earlgrey/ip_autogen/alert_handler#top"),
        report: Some("/hw/top_earlgrey/ip_autogen/alert_handler/dv"),
    },
    BuiltinEntry {
        key: "uart",
        title: "uart",
        metrics: Some("uart"),
        href: Some("/hw/ip/uart#top"),
        report: Some("/hw/ip/uart/dv"),
    },
    BuiltinEntry {
        key: "timers",
        title: "timers",
        metrics: Some("rv_timer"),
        href: Some("/hw/ip/rv_timer#top"),
        report: Some("/hw/ip/rv_timer/dv"),
    },
    BuiltinEntry {
        key: "gpio",
        title: "gpio",
        metrics: Some("gpio"),
        href: Some("/hw/ip/gpio#top"),
        report: Some("/hw/ip/gpio/dv"),
    },
    BuiltinEntry {
        key: "i2c",
        title: "i2c",
        metrics: Some("i2c"),
        href: Some("/hw/ip/i2c#top"),
        report: Some("/hw/ip/i2c/dv"),
    },
    BuiltinEntry {
        key: "spi-device",
        title: "spi-device",
        metrics: Some("spi_device"),
        href: Some("/hw/ip/spi_device#top"),
        report: Some("/hw/ip/spi_device/dv"),
    },
    BuiltinEntry {
        key: "pattern-generators",
        title: "pattern-generators",
        metrics: Some("pattgen"),
        href: Some("/hw/ip/pattgen#top"),
        report: Some("/hw/ip/pattgen/dv"),
    },
    BuiltinEntry {
        key: "pwm",
        title: "pwm",
        metrics: Some("pwm"),
        href: Some("/hw/ip/pwm#top"),
        report: Some("/hw/ip/pwm/dv"),
    },
    BuiltinEntry {
        key: "retention-sram",
        title: "retention-sram",
        metrics: Some("sram_ctrl"),
        href: Some("/hw/ip/sram_ctrl#top"),
        report: Some("/hw/ip/sram_ctrl_ret/dv"),
    },
    BuiltinEntry {
        key: "power-manager",
        title: "power-manager",
        metrics: Some("pwrmgr"),
        href: Some("/hw/ip/pwrmgr#top"),
        report: Some("/hw/ip/pwrmgr/dv"),
    },
    BuiltinEntry {
        key: "sysrst-controller",
        title: "sysrst-controller",
        metrics: Some("sysrst_ctrl"),
        href: Some("/hw/ip/sysrst_ctrl#top"),
        report: Some("/hw/ip/sysrst_ctrl/dv"),
    },
    BuiltinEntry {
        key: "aon-timers",
        title: "aon-timers",
        metrics: Some("aon_timer"),
        href: Some("/hw/ip/aon_timer#top"),
        report: Some("/hw/ip/aon_timer/dv"),
    },
    BuiltinEntry {
        key: "clkrst-managers",
        title: "clkrst-managers",
        metrics: Some("clkmgr"),
        href: Some("/hw/ip/clkmgr#top"),
        report: Some("/hw/ip/clkmgr/dv"),
    },
    BuiltinEntry {
        key: "pinmux-padctrl",
        title: "pinmux-padctrl",
        metrics: Some("pinmux"),
        href: Some("/hw/ip/pinmux#top"),
        report: None,
    },
    BuiltinEntry {
        key: "adc-controller",
        title: "adc-controller",
        metrics: Some("adc_ctrl"),
        href: Some("/hw/ip/adc_ctrl#top"),
        report: Some("/hw/ip/adc_ctrl/dv"),
    },
    BuiltinEntry {
        key: "sensor-control",
        title: "sensor-control",
        metrics: Some("sensor_ctrl"),
        href: Some("/hw/top_earlgrey/ip/sensor_ctrl#top"),
        report: None,
    },
    BuiltinEntry {
        key: "analog-sensor-top",
        title: "analog-sensor-top",
        metrics: Some("ast"),
        href: Some("/hw/top_earlgrey/ip/ast#top"),
        report: None,
    },
    BuiltinEntry {
        key: "padding",
        title: "padding",
        metrics: None,
        href: Some("/hw/top_earlgrey/ip/pinmux/doc/autogen/pinout_asic/"),
        report: None,
    },
];

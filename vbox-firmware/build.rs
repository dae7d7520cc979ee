//! Build script for vbox-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and compiles it into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use vbox_core::config::{BoardConfig, PinConfig};

fn main() {
    setup_linker();
    let config = load_board_config();
    generate_board_module(&config);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate board.toml
fn load_board_config() -> BoardConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        fail(
            "board.toml not found!",
            &[
                "The firmware requires a board.toml configuration file.".to_string(),
                "Please create one in the vbox-firmware directory.".to_string(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &[format!("Error: {}", e)]),
    };

    let config: BoardConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid board.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    if let Err(e) = config.validate() {
        fail("Invalid pin or timing configuration", &[e.to_string()]);
    }

    println!("cargo:warning=board.toml validated successfully");
    config
}

/// Abort the build with a framed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.clone()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `$OUT_DIR/board.rs` holding the validated configuration
fn generate_board_module(config: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let outputs = &config.outputs;
    let timing = &config.indicator;

    let source = format!(
        "pub const BOARD: BoardConfig = BoardConfig {{\n\
         \x20   serial: SerialConfig {{ baudrate: {baud} }},\n\
         \x20   outputs: OutputPins {{\n\
         \x20       camera: {camera},\n\
         \x20       error: {error},\n\
         \x20       detection: {detection},\n\
         \x20       type_bit0: {t0},\n\
         \x20       type_bit1: {t1},\n\
         \x20       type_bit2: {t2},\n\
         \x20   }},\n\
         \x20   activity_led: {led},\n\
         \x20   indicator: IndicatorTiming {{\n\
         \x20       ack_ms: {ack},\n\
         \x20       fault_on_ms: {on},\n\
         \x20       fault_off_ms: {off},\n\
         \x20       fault_pulses: {pulses},\n\
         \x20   }},\n\
         }};\n",
        baud = config.serial.baudrate,
        camera = pin_literal(&outputs.camera),
        error = pin_literal(&outputs.error),
        detection = pin_literal(&outputs.detection),
        t0 = pin_literal(&outputs.type_bit0),
        t1 = pin_literal(&outputs.type_bit1),
        t2 = pin_literal(&outputs.type_bit2),
        led = pin_literal(&config.activity_led),
        ack = timing.ack_ms,
        on = timing.fault_on_ms,
        off = timing.fault_off_ms,
        pulses = timing.fault_pulses,
    );

    fs::write(out_dir.join("board.rs"), source).unwrap();
}

fn pin_literal(pin: &PinConfig) -> String {
    format!(
        "PinConfig {{ pin: {}, inverted: {} }}",
        pin.pin, pin.inverted
    )
}

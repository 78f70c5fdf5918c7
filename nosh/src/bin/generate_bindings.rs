//! Generate UniFFI Swift bindings for Savora
//!
//! Run: cargo run --bin generate-bindings
//!
//! Inputs:
//!   target/release/libnosh.dylib       ← Built library for bindgen
//!
//! Outputs (paths match Project.swift):
//!   Sources/SavoraRust/noshFFI.h             ← C header
//!   Sources/SavoraRust/module.modulemap      ← Clang module map
//!   Sources/SavoraRust/libnosh.a             ← Universal static lib
//!   Sources/SavoraRustWrapper/nosh.swift     ← Swift bindings

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() {
    let rust_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let project_root = rust_dir.parent().expect("No parent directory");

    println!("Building Rust library...");
    run_cmd("cargo", &["build", "--release"], &rust_dir);

    println!("Generating Swift bindings...");
    run_cmd(
        "cargo",
        &[
            "run",
            "--bin",
            "uniffi-bindgen",
            "generate",
            "--library",
            "target/release/libnosh.dylib",
            "--language",
            "swift",
            "--out-dir",
            "generated",
        ],
        &rust_dir,
    );

    let swift_dest = project_root.join("Sources/SavoraRust");
    let wrapper_dest = project_root.join("Sources/SavoraRustWrapper");
    let generated = rust_dir.join("generated");

    println!("Copying generated Swift file...");
    let mut swift_content =
        fs::read_to_string(generated.join("nosh.swift")).expect("Read swift file");
    swift_content = swift_content.replace(
        "private var initializationResult",
        "nonisolated(unsafe) private var initializationResult",
    );
    swift_content = swift_content.replace(
        "#if canImport(noshFFI)",
        "#if canImport(SavoraRustFFI)",
    );
    swift_content = swift_content.replace("import noshFFI", "import SavoraRustFFI");
    fs::write(wrapper_dest.join("nosh.swift"), swift_content).expect("Write swift");

    fs::copy(generated.join("noshFFI.h"), swift_dest.join("noshFFI.h")).expect("Copy header");

    println!("Writing modulemap...");
    fs::write(
        swift_dest.join("module.modulemap"),
        "module SavoraRustFFI {\n    header \"noshFFI.h\"\n    export *\n}\n",
    )
    .expect("Write modulemap");

    println!("Building universal static library...");
    run_cmd(
        "cargo",
        &["build", "--release", "--target", "aarch64-apple-darwin"],
        &rust_dir,
    );
    run_cmd(
        "cargo",
        &["build", "--release", "--target", "x86_64-apple-darwin"],
        &rust_dir,
    );

    run_cmd(
        "lipo",
        &[
            "-create",
            "target/aarch64-apple-darwin/release/libnosh.a",
            "target/x86_64-apple-darwin/release/libnosh.a",
            "-output",
            &swift_dest.join("libnosh.a").to_string_lossy(),
        ],
        &rust_dir,
    );

    println!("Done! Bindings regenerated successfully.");
}

fn run_cmd(program: &str, args: &[&str], dir: &PathBuf) {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap_or_else(|e| panic!("Failed to run {}: {}", program, e));

    if !status.success() {
        panic!("{} failed with status: {}", program, status);
    }
}

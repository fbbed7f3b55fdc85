//! Custom cargo commands for the sitesearch crate.
//!
//! Usage:
//!   cargo xtask verify      - Run full verification suite
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (check + test + clippy)
//!   cargo xtask build-wasm  - Build the browser package with wasm-pack
//!   cargo xtask bench       - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("build-wasm") => build_wasm()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify      Run full verification suite (tests + clippy + wasm + weight docs)
  test        Run all Rust tests
  check       Quick check (cargo check + test + clippy)
  build-wasm  Build pkg/ with wasm-pack for the browser
  bench       Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sitesearch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Checking the wasm build...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "wasm",
    ])?;
    println!("✓ wasm feature builds\n");

    println!("[4/4] Verifying documented field weights...");
    verify_weights()?;
    println!("✓ Weights documented correctly\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Build the browser package into pkg/
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--out-dir",
            "pkg",
            "--",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Browser package written to {}", root.join("pkg").display());
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "search_bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The weight table in the crate docs must match the constants in scoring.rs.
fn verify_weights() -> Result<()> {
    let root = project_root()?;

    let scoring_rs = std::fs::read_to_string(root.join("src/scoring.rs"))
        .context("Failed to read scoring.rs")?;
    let lib_rs =
        std::fs::read_to_string(root.join("src/lib.rs")).context("Failed to read lib.rs")?;

    for (constant, field) in [
        ("TITLE_WEIGHT", "title"),
        ("EXCERPT_WEIGHT", "excerpt"),
        ("CONTENT_WEIGHT", "content"),
    ] {
        let code = extract_constant(&scoring_rs, constant)
            .with_context(|| format!("{} not found in scoring.rs", constant))?;
        let documented = extract_table_weight(&lib_rs, field)
            .with_context(|| format!("`{}` row not found in lib.rs docs", field))?;
        if code != documented {
            bail!(
                "{}={} in scoring.rs but lib.rs documents {} for `{}`",
                constant,
                code,
                documented,
                field
            );
        }
    }

    Ok(())
}

fn extract_constant(content: &str, name: &str) -> Option<u32> {
    // Look for "pub const TITLE_WEIGHT: u32 = 10;"
    content
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|value| value.trim().trim_end_matches(';').parse().ok())
}

fn extract_table_weight(content: &str, field: &str) -> Option<u32> {
    // Look for "//! | `title`   | 10     |"
    content
        .lines()
        .find(|line| line.contains(&format!("| `{}`", field)))
        .and_then(|line| line.split('|').nth(2))
        .and_then(|value| value.trim().parse().ok())
}

//! CLI Smoke Tests
//!
//! Integration tests for the fontpeek CLI commands:
//! - `info`: parameters, capabilities, tool availability
//! - `render`: font preview rendering
//! - `metadata`: font metadata queries
//!
//! Tests cover both success cases and failure cases (bad input, missing
//! tools); none of them require hb-view or fc-query to be installed.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the fontpeek binary
fn fontpeek_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fontpeek"))
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_params() {
    let output = Command::new(fontpeek_binary())
        .args(["info", "--params"])
        .output()
        .expect("Failed to execute fontpeek info --params");

    assert!(output.status.success(), "info --params should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["lang", "text", "dir", "variations", "features"] {
        assert!(stdout.contains(name), "Should list the {name} parameter");
    }
    assert!(
        stdout.contains("fonthandler_text"),
        "Should list host keys"
    );
}

#[test]
fn test_info_capabilities() {
    let output = Command::new(fontpeek_binary())
        .args(["info", "--capabilities"])
        .output()
        .expect("Failed to execute fontpeek info --capabilities");

    assert!(output.status.success(), "info --capabilities should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("640x240"),
        "Should declare the fixed thumbnail size"
    );
    assert!(stdout.contains("svg"), "Should declare the SVG format");
}

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn test_render_missing_tool_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("preview.svg");

    let output = Command::new(fontpeek_binary())
        .args([
            "render",
            "/nonexistent/font.ttf",
            "-o",
            out_path.to_str().unwrap(),
            "--hb-view",
            "/nonexistent/hb-view",
        ])
        .output()
        .expect("Failed to execute fontpeek render");

    assert!(
        !output.status.success(),
        "render with a missing shaping tool should fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found") || stderr.contains("Render failed"),
        "Should report the missing tool: {stderr}"
    );
    assert!(!out_path.exists(), "No thumbnail may be produced on failure");
}

#[test]
#[cfg(unix)]
fn test_render_tool_writing_nothing_fails() {
    // /bin/true exits cleanly without writing the output file
    let tool = PathBuf::from("/bin/true");
    if !tool.exists() {
        eprintln!("Skipping test: {} not present", tool.display());
        return;
    }

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("preview.svg");

    let output = Command::new(fontpeek_binary())
        .args([
            "render",
            "/nonexistent/font.ttf",
            "-o",
            out_path.to_str().unwrap(),
            "--hb-view",
            tool.to_str().unwrap(),
            "-q",
        ])
        .output()
        .expect("Failed to execute fontpeek render");

    assert!(
        !output.status.success(),
        "render must fail when the tool writes no output"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no output"),
        "Should report the missing output file: {stderr}"
    );
}

#[test]
fn test_render_invalid_language_fails() {
    let output = Command::new(fontpeek_binary())
        .args([
            "render",
            "font.ttf",
            "-o",
            "out.svg",
            "-l",
            "not a tag!",
        ])
        .output()
        .expect("Failed to execute fontpeek render");

    assert!(
        !output.status.success(),
        "render with an invalid language tag should fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("language tag"),
        "Should name the bad language tag: {stderr}"
    );
}

#[test]
fn test_render_invalid_direction_fails() {
    let output = Command::new(fontpeek_binary())
        .args([
            "render",
            "font.ttf",
            "-o",
            "out.svg",
            "-d",
            "sideways",
        ])
        .output()
        .expect("Failed to execute fontpeek render");

    assert!(
        !output.status.success(),
        "render with an unknown direction should fail"
    );
}

#[test]
fn test_render_requires_output() {
    let output = Command::new(fontpeek_binary())
        .args(["render", "font.ttf"])
        .output()
        .expect("Failed to execute fontpeek render");

    assert!(
        !output.status.success(),
        "render without --output should fail"
    );
}

// ============================================================================
// Metadata Command Tests
// ============================================================================

#[test]
fn test_metadata_missing_tool_fails() {
    let output = Command::new(fontpeek_binary())
        .args([
            "metadata",
            "/nonexistent/font.ttf",
            "--fc-query",
            "/nonexistent/fc-query",
        ])
        .output()
        .expect("Failed to execute fontpeek metadata");

    assert!(
        !output.status.success(),
        "metadata with a missing tool should fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found") || stderr.contains("Metadata query failed"),
        "Should report the missing tool: {stderr}"
    );
}

#[test]
#[cfg(unix)]
fn test_metadata_unparseable_response_fails() {
    // /bin/true exits cleanly printing nothing, which cannot split into
    // the three expected fields
    let tool = PathBuf::from("/bin/true");
    if !tool.exists() {
        eprintln!("Skipping test: {} not present", tool.display());
        return;
    }

    let output = Command::new(fontpeek_binary())
        .args([
            "metadata",
            "/nonexistent/font.ttf",
            "--fc-query",
            tool.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute fontpeek metadata");

    assert!(
        !output.status.success(),
        "metadata must fail on an unparseable response"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unparseable") || stderr.contains("metadata"),
        "Should report the unparseable response: {stderr}"
    );
}

// ============================================================================
// General CLI Tests
// ============================================================================

#[test]
fn test_version() {
    let output = Command::new(fontpeek_binary())
        .args(["--version"])
        .output()
        .expect("Failed to execute fontpeek --version");

    assert!(output.status.success(), "--version should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("fontpeek"),
        "Should show version info"
    );
}

#[test]
fn test_help() {
    let output = Command::new(fontpeek_binary())
        .args(["--help"])
        .output()
        .expect("Failed to execute fontpeek --help");

    assert!(output.status.success(), "--help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("render"), "Should list render command");
    assert!(stdout.contains("metadata"), "Should list metadata command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_unknown_command_fails() {
    let output = Command::new(fontpeek_binary())
        .args(["unknown_command"])
        .output()
        .expect("Failed to execute fontpeek");

    assert!(!output.status.success(), "unknown command should fail");
}

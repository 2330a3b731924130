#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn sshconf_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("sshconf").unwrap()
}

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
	let path = dir.join("config");
	fs::write(&path, content).unwrap();
	path
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	sshconf_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("OpenSSH client config"));
}

#[test]
fn test_version_flag() {
	sshconf_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("sshconf"));
}

#[test]
fn test_no_args_shows_help() {
	// With arg_required_else_help, no args should show help
	sshconf_cmd()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// show tests
// ============================================================================

#[test]
fn test_show_prints_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config = write_config(temp_dir.path(), "Host example\n    User me\n");

	sshconf_cmd()
		.args(["--config", config.to_str().unwrap(), "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Host example\n    User me"));
}

#[test]
fn test_show_json_prints_tree() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config = write_config(temp_dir.path(), "Host example\n    User me");

	sshconf_cmd()
		.args(["--config", config.to_str().unwrap(), "show", "--json"])
		.assert()
		.success()
		.stdout(predicate::str::contains("\"key\": \"Host\""))
		.stdout(predicate::str::contains("\"value\": \"example\""))
		.stdout(predicate::str::contains("\"children\""));
}

#[test]
fn test_show_missing_file_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let missing = temp_dir.path().join("nope");

	sshconf_cmd()
		.args(["--config", missing.to_str().unwrap(), "show"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load"));
}

// ============================================================================
// check tests
// ============================================================================

#[test]
fn test_check_reports_fidelity() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config = write_config(
		temp_dir.path(),
		"# settings\nHost example\n    User = me   # inline\n\nHost *\n\tPort 22\n",
	);

	sshconf_cmd()
		.args(["--config", config.to_str().unwrap(), "check"])
		.assert()
		.success()
		.stdout(predicate::str::contains("round-trips byte-for-byte"));
}

// ============================================================================
// patch tests
// ============================================================================

#[test]
fn test_patch_rewrites_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config = write_config(
		temp_dir.path(),
		"Host example\n    User old-user\n\nHost other\n    Port 22\n",
	);

	sshconf_cmd()
		.args([
			"--config",
			config.to_str().unwrap(),
			"patch",
			"Host example",
			"Host example\n    User new-user",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains("Patched"));

	assert_eq!(
		fs::read_to_string(&config).unwrap(),
		"Host example\n    User new-user\n\nHost other\n    Port 22\n"
	);
}

#[test]
fn test_patch_stdout_leaves_file_untouched() {
	let temp_dir = tempfile::tempdir().unwrap();
	let original = "Host example\n    User old-user";
	let config = write_config(temp_dir.path(), original);

	sshconf_cmd()
		.args([
			"--config",
			config.to_str().unwrap(),
			"patch",
			"Host new",
			"Host new\n    User new-user",
			"--stdout",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"Host example\n    User old-user\nHost new\n    User new-user",
		));

	assert_eq!(fs::read_to_string(&config).unwrap(), original);
}

#[test]
fn test_patch_invalid_selector_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let original = "Host example\n    User me";
	let config = write_config(temp_dir.path(), original);

	sshconf_cmd()
		.args([
			"--config",
			config.to_str().unwrap(),
			"patch",
			"  # just a comment",
			"Host new",
		])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Invalid selector"));

	assert_eq!(fs::read_to_string(&config).unwrap(), original);
}

// ============================================================================
// delete tests
// ============================================================================

#[test]
fn test_delete_removes_block() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config = write_config(
		temp_dir.path(),
		"Host example\n    HostName example.com\n\nHost other\n    HostName other.com",
	);

	sshconf_cmd()
		.args(["--config", config.to_str().unwrap(), "delete", "Host example"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Deleted"));

	assert_eq!(
		fs::read_to_string(&config).unwrap(),
		"\nHost other\n    HostName other.com"
	);
}

#[test]
fn test_delete_blank_selector_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let original = "Host example\n    HostName example.com";
	let config = write_config(temp_dir.path(), original);

	sshconf_cmd()
		.args(["--config", config.to_str().unwrap(), "delete", "  "])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Invalid selector"));

	assert_eq!(fs::read_to_string(&config).unwrap(), original);
}

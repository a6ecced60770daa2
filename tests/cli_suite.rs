use anypkg::utils::privilege;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn anypkg() -> Command {
    Command::new(env!("CARGO_BIN_EXE_anypkg"))
}

/// A fake host: `bin/` holds the package managers on PATH, `config/` is the
/// settings directory with fallback probing disabled.
struct Host {
    root: TempDir,
}

impl Host {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("bin")).unwrap();
        fs::create_dir(root.path().join("config")).unwrap();
        fs::write(
            root.path().join("config/settings.kdl"),
            "settings {\n    probe-fallback #false\n    pacing-ms 0\n}\n",
        )
        .unwrap();
        Self { root }
    }

    fn bin_dir(&self) -> std::path::PathBuf {
        self.root.path().join("bin")
    }

    fn config_dir(&self) -> std::path::PathBuf {
        self.root.path().join("config")
    }

    fn add_manager(&self, name: &str, script: &str) {
        write_script(&self.bin_dir().join(name), script);
    }

    fn command(&self) -> Command {
        let mut cmd = anypkg();
        cmd.env("PATH", self.bin_dir())
            .env("ANYPKG_CONFIG_DIR", self.config_dir())
            .env_remove("SUDO_USER")
            .arg("--color")
            .arg("never");
        cmd
    }
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
}

/// A fresh host for scenarios that reach detection. anypkg refuses to run
/// as root, so under a root runner the scenario is reported as skipped.
fn host_or_skip(test: &str) -> Option<Host> {
    if privilege::is_root() {
        eprintln!("skipped {test}: anypkg refuses to run as root; rerun as an unprivileged user");
        return None;
    }
    Some(Host::new())
}

#[test]
fn test_help_command() {
    anypkg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unified package manager interface"))
        .stdout(predicate::str::contains("-so SOURCE"));
}

#[test]
fn test_version_flag() {
    let expected = format!("anypkg {}", env!("CARGO_PKG_VERSION"));

    anypkg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_missing_action_is_a_usage_error() {
    anypkg()
        .arg("firefox")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: anypkg"));
}

#[test]
fn test_conflicting_actions_are_a_usage_error() {
    anypkg().args(["-s", "-i", "vim"]).assert().code(2);
}

#[test]
fn test_completions_print_a_script() {
    anypkg()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anypkg"));
}

#[test]
fn test_refuses_to_run_under_sudo() {
    let host = Host::new();

    host.command()
        .env("SUDO_USER", "someone")
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "should not be run with elevated privileges",
        ));
}

#[test]
fn test_invalid_settings_fail_before_anything_runs() {
    let host = Host::new();
    fs::write(host.config_dir().join("settings.kdl"), "editor \"nvim\"\n").unwrap();

    host.command()
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn test_list_reports_detected_managers_as_json() {
    let Some(host) = host_or_skip("test_list_reports_detected_managers_as_json") else {
        return;
    };
    host.add_manager("yay", "exit 0");

    host.command()
        .args(["-l", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\": \"list\""))
        .stdout(predicate::str::contains("\"alternatives\": [\n      \"yay\"\n    ]"))
        .stdout(predicate::str::contains("\"missing_alternatives\": [\n      \"flatpak\"\n    ]"));
}

#[test]
fn test_unknown_source_is_rejected() {
    let Some(host) = host_or_skip("test_unknown_source_is_rejected") else {
        return;
    };
    host.add_manager("yay", "echo should-not-run; exit 0");

    host.command()
        .args(["-i", "firefox", "-so", "brew"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("should-not-run").not())
        .stderr(predicate::str::contains(
            "Package manager 'brew' not found or not available (available: yay)",
        ));
}

#[test]
fn test_list_rejects_unknown_source() {
    let Some(host) = host_or_skip("test_list_rejects_unknown_source") else {
        return;
    };
    host.add_manager("yay", "exit 0");

    host.command()
        .args(["-l", "-so", "brew"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Available Package Managers").not())
        .stderr(predicate::str::contains("Package manager 'brew' not found"));
}

#[test]
fn test_verbose_reports_the_settings_file() {
    let Some(host) = host_or_skip("test_verbose_reports_the_settings_file") else {
        return;
    };
    host.add_manager("yay", "exit 0");
    let expected = format!(
        "Loaded settings from {}",
        host.config_dir().join("settings.kdl").display()
    );

    host.command()
        .args(["-l", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_search_without_packages_fails_validation() {
    let Some(host) = host_or_skip("test_search_without_packages_fails_validation") else {
        return;
    };
    host.add_manager("yay", "exit 0");

    host.command()
        .arg("-s")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No packages specified"));
}

#[test]
fn test_flatpak_search_marks_installed_apps() {
    let Some(host) = host_or_skip("test_flatpak_search_marks_installed_apps") else {
        return;
    };
    host.add_manager(
        "flatpak",
        r#"case "$1" in
  list) printf 'GIMP\torg.gimp.GIMP\t2.10\tstable\tsystem\n' ;;
  search) printf 'GIMP\tImage editor\torg.gimp.GIMP\t2.10\tstable\tflathub\n' ;;
esac"#,
    );

    host.command()
        .args(["-s", "gimp", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"entries\""))
        .stdout(predicate::str::contains("\"origin\": \"flathub/stable\""))
        .stdout(predicate::str::contains("\"installed\": true"));
}

#[test]
fn test_yay_search_renders_package_lines() {
    let Some(host) = host_or_skip("test_yay_search_renders_package_lines") else {
        return;
    };
    host.add_manager(
        "yay",
        r#"printf 'aur/paru 2.0.3-1 (+1 0.00) (Installed)\n    Feature packed AUR helper\n'"#,
    );

    host.command()
        .args(["--search", "paru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paru 2.0.3-1 aur -i"));
}

#[test]
fn test_failed_install_exits_nonzero() {
    let Some(host) = host_or_skip("test_failed_install_exits_nonzero") else {
        return;
    };
    host.add_manager("yay", "exit 3");

    host.command()
        .args(["-i", "ghost", "--source", "YAY"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Package installation failed with code 3"));
}

#[test]
fn test_flatpak_remove_cleans_up_once() {
    let Some(host) = host_or_skip("test_flatpak_remove_cleans_up_once") else {
        return;
    };
    let log = host.root.path().join("calls.log");
    host.add_manager(
        "flatpak",
        &format!("echo \"$@\" >> '{}'", log.display()),
    );

    host.command()
        .args(["-r", "org.gimp.GIMP"])
        .assert()
        .success();

    let calls = fs::read_to_string(&log).unwrap();
    assert_eq!(calls, "uninstall org.gimp.GIMP\nuninstall --unused\n");
}

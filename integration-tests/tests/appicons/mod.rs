use crate::{Workdir, SOURCE};
use assert_cmd::Command;
use std::path::Path;

/// The CLI with none of its environment variables inherited from the test runner.
fn appicons_bare() -> Command {
    let mut cmd = Command::cargo_bin("test-appicons").unwrap();
    cmd.env_remove("APPICONS_CONFIG_FILE")
        .env_remove("APPICONS_INKSCAPE")
        .env_remove("APPICONS_PROJECT_DIR");
    cmd
}

fn appicons_with_converter(workdir: &Workdir, converter: &Path) -> Command {
    let mut cmd = appicons_bare();
    cmd.arg("--project-dir")
        .arg(workdir.project_dir())
        .arg("--inkscape-binary")
        .arg(converter);
    cmd
}

fn appicons(workdir: &Workdir) -> Command {
    appicons_with_converter(workdir, &workdir.converter())
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn should_generate_all_icons_by_default() {
    let workdir = Workdir::new().unwrap().with_source().unwrap();

    let output = appicons(&workdir).assert().success().get_output().clone();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("✓ created: web/icons/Icon-192.png (192x192)"));
    assert!(stdout.contains("32/32 icons generated"));
    assert_eq!(workdir.png_dimensions("web/icons/Icon-192.png"), (192, 192));
    assert_eq!(
        workdir.png_dimensions(
            "ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-83.5x83.5@2x.png"
        ),
        (167, 167)
    );
}

#[test]
fn should_generate_icons_for_selected_platform() {
    let workdir = Workdir::new().unwrap().with_source().unwrap();

    let output = appicons(&workdir)
        .args(["generate", "--platform", "web"])
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("5/5 icons generated"));
    assert!(workdir.output("web/favicon.png").exists());
    assert!(!workdir.output("android").exists());
    assert_eq!(workdir.invocations().len(), 5);
}

#[test]
fn should_report_failed_icons_and_still_exit_normally() {
    let workdir = Workdir::new()
        .unwrap()
        .with_source()
        .unwrap()
        .failing_for_sizes(&[64])
        .unwrap();

    let output = appicons(&workdir)
        .args(["generate", "-p", "web"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("✗ failed: web/favicon.png (64x64)"));
    assert!(stdout.contains("4/5 icons generated"));
}

#[test]
fn should_exit_with_error_in_strict_mode_if_an_icon_failed() {
    let workdir = Workdir::new()
        .unwrap()
        .with_source()
        .unwrap()
        .failing_for_sizes(&[64])
        .unwrap();

    appicons(&workdir)
        .args(["generate", "-p", "web", "--strict"])
        .assert()
        .failure();
}

#[test]
fn should_report_missing_source_without_exporting() {
    let workdir = Workdir::new().unwrap();

    let output = appicons(&workdir).assert().success().get_output().clone();

    assert!(stdout_of(&output).contains("source image not found"));
    assert!(workdir.invocations().is_empty());
}

#[test]
fn should_exit_with_error_in_strict_mode_without_source() {
    let workdir = Workdir::new().unwrap();

    appicons(&workdir)
        .args(["generate", "--strict"])
        .assert()
        .failure();
    assert!(workdir.invocations().is_empty());
}

#[test]
fn should_use_targets_and_source_from_project_config_file() {
    let workdir = Workdir::new()
        .unwrap()
        .with_project_file("design/logo.svg", "<svg/>")
        .unwrap()
        .with_project_file(
            "appicons.toml",
            r#"
            source = "design/logo.svg"

            [[targets]]
            path = "linux/hicolor/48x48/apps/app.png"
            size = 48
            "#,
        )
        .unwrap();

    let output = appicons(&workdir).assert().success().get_output().clone();

    assert!(stdout_of(&output).contains("1/1 icons generated"));
    assert_eq!(
        workdir.png_dimensions("linux/hicolor/48x48/apps/app.png"),
        (48, 48)
    );
    assert_eq!(
        workdir.invocations()[0][0],
        workdir.output("design/logo.svg").display().to_string()
    );
}

#[test]
fn should_use_explicit_config_file() {
    let workdir = Workdir::new().unwrap().with_source().unwrap();
    let config_file = workdir.bin_dir().join("icons.toml");
    std::fs::write(
        &config_file,
        "[[targets]]\npath = \"icon.png\"\nsize = 24\n",
    )
    .unwrap();

    appicons(&workdir)
        .arg("--config-file")
        .arg(&config_file)
        .assert()
        .success();

    assert_eq!(workdir.png_dimensions("icon.png"), (24, 24));
}

#[test]
fn should_reject_invalid_config_file() {
    let workdir = Workdir::new()
        .unwrap()
        .with_source()
        .unwrap()
        .with_project_file("appicons.toml", "[[targets]]\npath = \"icon.png\"\nsize = 0\n")
        .unwrap();

    appicons(&workdir).assert().failure();
    assert!(workdir.invocations().is_empty());
}

#[test]
fn should_report_missing_converter_per_icon() {
    let workdir = Workdir::new().unwrap().with_source().unwrap();

    let output = appicons_with_converter(&workdir, &workdir.bin_dir().join("missing-inkscape"))
        .args(["generate", "-p", "android"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("converter not found").count(), 5);
    assert!(stdout.contains("0/5 icons generated"));
}

#[test]
fn should_list_targets() {
    let workdir = Workdir::new().unwrap();

    let output = appicons(&workdir)
        .args(["list", "-p", "macos"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = stdout_of(&output);
    assert!(stdout.contains("app_icon_1024.png"));
    assert!(!stdout.contains("Icon-192.png"));
    assert!(stdout.contains(&format!("7 icons from {}", SOURCE)));
}

#[test]
fn should_locate_explicit_converter() {
    let workdir = Workdir::new().unwrap();

    let output = appicons(&workdir)
        .arg("locate")
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(
        stdout_of(&output),
        format!("{}\n", workdir.converter().display())
    );
}

#[cfg(unix)]
#[test]
fn should_locate_converter_in_search_path() {
    let workdir = Workdir::new().unwrap();

    let output = appicons_bare()
        .env("PATH", workdir.bin_dir())
        .arg("--project-dir")
        .arg(workdir.project_dir())
        .arg("locate")
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(
        stdout_of(&output),
        format!("{}\n", workdir.converter().display())
    );
}

#[test]
fn should_fail_to_locate_missing_converter() {
    let workdir = Workdir::new().unwrap();

    appicons_with_converter(&workdir, &workdir.bin_dir().join("missing-inkscape"))
        .arg("locate")
        .assert()
        .failure();
}

mod common;
mod utils;

use anyhow::Result;
use common::TestEnvironment;
use utils::run_appwatch_command;

#[test]
fn test_help_lists_subcommands() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = run_appwatch_command(&env, &["--help"])?;

    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    for subcommand in ["list", "remove", "info", "completions"] {
        assert!(
            output.stdout.contains(subcommand),
            "missing {subcommand} in help:\n{}",
            output.stdout
        );
    }
    Ok(())
}

#[test]
fn test_completions_do_not_need_config() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_config("not valid toml = = =")?;

    let output = run_appwatch_command(&env, &["completions", "bash"])?;
    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("appwatch"));
    Ok(())
}

#[test]
fn test_list_prints_three_tab_separated_fields() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = run_appwatch_command(&env, &["list"])?;

    assert!(
        matches!(output.exit_code, 0 | 2),
        "unexpected exit {}: {}",
        output.exit_code,
        output.stderr
    );
    if output.exit_code == 0 {
        for line in output.stdout.lines() {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 3, "bad listing line: {line:?}");
            assert!(["pacman", "yay/AUR", "flatpak", "apt"].contains(&fields[0]));
            assert!(!fields[1].is_empty());
        }
    } else {
        assert!(output.stderr.contains("Error listing apps:"));
    }
    Ok(())
}

#[test]
fn test_list_json_is_an_array() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = run_appwatch_command(&env, &["--output", "json", "list"])?;

    if output.exit_code == 0 {
        let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
        assert!(value.is_array(), "not an array: {}", output.stdout);
    } else {
        assert_eq!(output.exit_code, 2, "stderr: {}", output.stderr);
    }
    Ok(())
}

#[test]
fn test_list_writes_log_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    run_appwatch_command(&env, &["list"])?;

    let log = std::fs::read_to_string(env.log_file())?;
    assert!(log.contains("appwatch starting"), "log was:\n{log}");
    Ok(())
}

#[test]
fn test_remove_dry_run_prints_command() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = run_appwatch_command(
        &env,
        &["remove", "--source", "flatpak", "--dry-run", "--yes", "org.example.App"],
    )?;

    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    assert!(
        output
            .stdout
            .contains("Would run: flatpak uninstall -y org.example.App"),
        "stdout was:\n{}",
        output.stdout
    );
    Ok(())
}

#[test]
fn test_remove_dry_run_from_config() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_config("dry_run = true\nconfirm = false\n")?;

    let output = run_appwatch_command(&env, &["remove", "--source", "apt", "foo"])?;
    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Would run: apt remove -y foo"));
    Ok(())
}

#[test]
fn test_remove_dry_run_json_event() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = run_appwatch_command(
        &env,
        &["--output", "json", "remove", "-s", "pacman", "--dry-run", "vim"],
    )?;

    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    let event: serde_json::Value = serde_json::from_str(output.stdout.trim())?;
    assert_eq!(event["code"], "remove.dry_run");
    assert_eq!(event["data"]["command"], "pacman -Rns --noconfirm vim");
    Ok(())
}

#[test]
fn test_explicit_config_path_is_used() -> Result<()> {
    let env = TestEnvironment::new()?;
    let custom = env.home().join("custom.toml");
    std::fs::write(&custom, "dry_run = true\naur_helper = \"paru\"\n")?;

    let output = run_appwatch_command(
        &env,
        &["--config", custom.to_str().unwrap_or_default(), "remove", "-s", "aur", "-y", "foo"],
    )?;
    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Would run: paru -Rns --noconfirm foo"));
    Ok(())
}

#[test]
fn test_invalid_config_fails_with_path() -> Result<()> {
    let env = TestEnvironment::new()?;
    let path = env.write_config("confrim = false\n")?;

    let output = run_appwatch_command(&env, &["remove", "--source", "apt", "--dry-run", "foo"])?;
    assert_eq!(output.exit_code, 1);
    assert!(
        output.stderr.contains(&path.display().to_string()),
        "stderr was:\n{}",
        output.stderr
    );
    Ok(())
}

#[test]
fn test_unknown_source_is_a_usage_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = run_appwatch_command(&env, &["remove", "--source", "snap", "foo"])?;

    assert_eq!(output.exit_code, 2);
    assert!(output.stderr.contains("snap"));
    Ok(())
}

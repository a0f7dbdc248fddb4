use aiexec_kernel::config::{ConfigError, load_config};
use aiexec_kernel::domain::config::{AiexecConfig, PrewarmPolicy};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_catalog_from_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("aiexec.toml");
    fs::write(
        &path,
        r#"
[catalog]
namespace = "custom.components"
prewarm = ["processing", "processing.PromptComponent"]
prewarm_policy = "fail_fast"
"#,
    )?;

    let cfg: AiexecConfig = load_config(Some(&path))?;
    assert_eq!(cfg.catalog.namespace, "custom.components");
    assert_eq!(cfg.catalog.prewarm, ["processing", "processing.PromptComponent"]);
    assert_eq!(cfg.catalog.prewarm_policy, PrewarmPolicy::FailFast);
    Ok(())
}

#[test]
fn missing_sections_fall_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.toml");
    fs::write(&path, "")?;

    let cfg: AiexecConfig = load_config(Some(&path))?;
    assert_eq!(cfg.catalog.namespace, "aiexec.components");
    assert_eq!(cfg.catalog.prewarm_policy, PrewarmPolicy::Continue);
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<AiexecConfig>(Some(&path)).expect_err("file is required");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

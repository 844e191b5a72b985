//! Configuration management for the CLI host.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".fencelines/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Theme used when emitting CSS for the rendered markup.
    #[serde(default = "Defaults::default_theme")]
    pub theme: String,
    /// Language tag assumed when none is given on the command line.
    #[serde(default)]
    pub language: String,
    /// CSS class applied to the wrapping `<pre>` element.
    #[serde(default = "Defaults::default_class_name")]
    pub class_name: String,
}

impl Defaults {
    fn default_theme() -> String {
        "base16-ocean.dark".into()
    }

    fn default_class_name() -> String {
        "highlight".into()
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            theme: Self::default_theme(),
            language: String::new(),
            class_name: Self::default_class_name(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    theme: Option<String>,
    language: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            theme: env::var("FENCELINES_THEME").ok(),
            language: env::var("FENCELINES_LANGUAGE").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(theme: &str, language: &str) -> Self {
        Self {
            theme: Some(theme.to_owned()),
            language: Some(language.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            defaults: merge_defaults(self.defaults, other.defaults),
        }
    }
}

fn merge_defaults(base: Defaults, overlay: Defaults) -> Defaults {
    Defaults {
        theme: if overlay.theme != Defaults::default_theme() {
            overlay.theme
        } else {
            base.theme
        },
        language: if !overlay.language.is_empty() {
            overlay.language
        } else {
            base.language
        },
        class_name: if overlay.class_name != Defaults::default_class_name() {
            overlay.class_name
        } else {
            base.class_name
        },
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("fencelines/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    let root = find_repo_root(&cwd).unwrap_or(cwd);
    Ok(Some(root.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(theme) = env.theme {
        config.defaults.theme = theme;
    }
    if let Some(language) = env.language {
        config.defaults.language = language;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_uses_defaults_when_no_files() {
        let config = Config::load_with_layers(None, None, EnvOverrides::default())
            .expect("load default config");
        assert_eq!(config.defaults.theme, "base16-ocean.dark");
        assert_eq!(config.defaults.language, "");
        assert_eq!(config.defaults.class_name, "highlight");
    }

    #[test]
    fn merge_global_and_workspace() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let global = temp.path().join("config.toml");
        fs::write(
            &global,
            r#"
[defaults]
theme = "InspiredGitHub"
"#,
        )?;

        let workspace_dir = temp.path().join("repo");
        fs::create_dir_all(workspace_dir.join(".fencelines"))?;
        fs::create_dir_all(workspace_dir.join(".git"))?;
        fs::write(
            workspace_dir.join(".fencelines/config.toml"),
            r#"
[defaults]
language = "rust"
class_name = "codehilite"
"#,
        )?;

        let global_path = Some(global);
        let workspace_path = Some(workspace_dir.join(".fencelines/config.toml"));

        let config =
            Config::load_with_layers(global_path, workspace_path, EnvOverrides::default())?;

        assert_eq!(config.defaults.theme, "InspiredGitHub");
        assert_eq!(config.defaults.language, "rust");
        assert_eq!(config.defaults.class_name, "codehilite");

        Ok(())
    }

    #[test]
    fn env_overrides_take_precedence() -> Result<()> {
        let overrides = EnvOverrides::for_tests("Solarized (dark)", "python");
        let config = Config::load_with_layers(None, None, overrides)?;
        assert_eq!(config.defaults.theme, "Solarized (dark)");
        assert_eq!(config.defaults.language, "python");
        Ok(())
    }

    #[test]
    fn invalid_config_returns_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("broken.toml");
        fs::write(&file, "this is not toml")?;
        let result = Config::from_file(&file);
        assert!(result.is_err());
        Ok(())
    }
}

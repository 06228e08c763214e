use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_file_name() -> String { "shader.glsl".into() }
fn default_pretty() -> bool { true }

pub fn load_config(path: &PathBuf) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_sections_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scaffold.file_name, "shader.glsl");
        assert!(config.export.pretty);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config: Config = toml::from_str("[export]\npretty = false\n").unwrap();
        assert_eq!(config.scaffold.file_name, "shader.glsl");
        assert!(!config.export.pretty);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scaffold]").unwrap();
        writeln!(file, "file_name = \"main.glsl\"").unwrap();

        let config = load_config(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.scaffold.file_name, "main.glsl");
        assert!(config.export.pretty);
    }

    #[test]
    fn missing_file_is_none() {
        assert!(load_config(&PathBuf::from("/nonexistent/tweakpad.toml")).is_none());
    }
}

//! Configuration: where the task list lives.
//!
//! Two files are involved. The config file is a small JSON object whose
//! `path` and `name` fields point at the data file; the data file holds the
//! tasks themselves (see [`crate::db`]). Default locations are carried by an
//! explicit [`Defaults`] value rather than process-wide constants.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::db::to_pretty_json;
use crate::error::{Result, TodoError};
use crate::fields::ConfigOption;

pub const DEFAULT_CONFIG_NAME: &str = "config_todo.json";
pub const DEFAULT_LIST: &str = "checklist.json";

/// Default locations used by bootstrap and by the front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub config_dir: PathBuf,
    pub config_name: String,
    pub data_dir: PathBuf,
    pub data_name: String,
}

impl Defaults {
    /// Layout under a home directory: `~/.todo/config` and `~/.todo/notepad`.
    pub fn from_home(home: &Path) -> Self {
        let root = home.join(".todo");
        Defaults {
            config_dir: root.join("config"),
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            data_dir: root.join("notepad"),
            data_name: DEFAULT_LIST.to_string(),
        }
    }

    /// Layout under `$HOME`, or the current directory if it is unset.
    pub fn from_env() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Defaults::from_home(Path::new(&home))
    }

    /// Point the config file somewhere else, keeping the default data location.
    pub fn with_config_file(mut self, config_file: &Path) -> Self {
        if let Some(name) = config_file.file_name() {
            self.config_name = name.to_string_lossy().into_owned();
        }
        self.config_dir = config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        self
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(&self.config_name)
    }
}

/// The two fields of the config file that locate the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub path: String,
    pub name: String,
}

impl Config {
    /// Read the config file. A missing or unreadable file is `ConfigNotFound`;
    /// anything other than a UTF-8 object with string `path` and `name` is
    /// `InvalidFormat`. Unknown keys are ignored.
    pub fn load(config_file: &Path) -> Result<Self> {
        let buf = fs::read(config_file).map_err(|source| TodoError::ConfigNotFound {
            path: config_file.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| TodoError::invalid_format(config_file, e))?;
        debug!(config = %config_file.display(), path = %config.path, name = %config.name, "loaded config");
        Ok(config)
    }

    /// Full location of the data file, always recomputed as `path/name`.
    ///
    /// The two fields are concatenated, so an absolute `name` still lands
    /// under `path` and an empty `path` means the filesystem root.
    pub fn data_file(&self) -> PathBuf {
        PathBuf::from(format!("{}/{}", self.path, self.name))
    }
}

/// Set the data directory in the config file.
pub fn set_path(path: &str, config_file: &Path) -> Result<()> {
    set_field(ConfigOption::Path, path, config_file)
}

/// Set the data file name in the config file.
pub fn set_name(name: &str, config_file: &Path) -> Result<()> {
    set_field(ConfigOption::Name, name, config_file)
}

/// Merge one field into the config object and rewrite the whole file.
///
/// A missing or corrupt config file is replaced by an empty object first;
/// every other key already present is kept. A store that is already loaded
/// keeps using its old data file.
pub fn set_field(option: ConfigOption, value: &str, config_file: &Path) -> Result<()> {
    let mut object = read_object(config_file);
    object.insert(option.key().to_string(), Value::String(value.to_string()));
    write_object(config_file, object)?;
    debug!(config = %config_file.display(), key = option.key(), value, "updated config");
    Ok(())
}

fn read_object(config_file: &Path) -> Map<String, Value> {
    match fs::read_to_string(config_file) {
        Ok(buf) => match serde_json::from_str::<Value>(&buf) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                debug!(config = %config_file.display(), "config is not a JSON object, starting from empty");
                Map::new()
            }
        },
        Err(_) => Map::new(),
    }
}

fn write_object(config_file: &Path, object: Map<String, Value>) -> Result<()> {
    if let Some(dir) = config_file.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| TodoError::persistence(dir, e))?;
        }
    }
    let data = to_pretty_json(&Value::Object(object))
        .map_err(|e| TodoError::persistence(config_file, e))?;
    fs::write(config_file, data).map_err(|e| TodoError::persistence(config_file, e))
}

/// First-run setup.
///
/// Creates the config and default data directories when absent and writes a
/// default config file pointing at `data_dir/data_name`. An existing config
/// file is left untouched.
pub fn bootstrap(defaults: &Defaults) -> Result<()> {
    for dir in [&defaults.config_dir, &defaults.data_dir] {
        if !dir.exists() {
            debug!(dir = %dir.display(), "creating directory");
            fs::create_dir_all(dir).map_err(|e| TodoError::persistence(dir.as_path(), e))?;
        }
    }

    let config_file = defaults.config_file();
    if !config_file.exists() {
        let config = Config {
            path: defaults.data_dir.to_string_lossy().into_owned(),
            name: defaults.data_name.clone(),
        };
        let data = to_pretty_json(&config).map_err(|e| TodoError::persistence(&config_file, e))?;
        fs::write(&config_file, data).map_err(|e| TodoError::persistence(&config_file, e))?;
        debug!(config = %config_file.display(), "wrote default config");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_defaults_layout() {
        let d = Defaults::from_home(Path::new("/home/ann"));
        assert_eq!(d.config_file(), PathBuf::from("/home/ann/.todo/config/config_todo.json"));
        assert_eq!(d.data_dir, PathBuf::from("/home/ann/.todo/notepad"));
        assert_eq!(d.data_name, "checklist.json");

        let d = d.with_config_file(Path::new("/etc/todo/alt.json"));
        assert_eq!(d.config_file(), PathBuf::from("/etc/todo/alt.json"));
        assert_eq!(d.data_dir, PathBuf::from("/home/ann/.todo/notepad"));
    }

    #[test]
    fn test_bootstrap_writes_default_config() {
        let tmp = TempDir::new().unwrap();
        let defaults = Defaults::from_home(tmp.path());
        bootstrap(&defaults).unwrap();

        assert!(defaults.config_dir.is_dir());
        assert!(defaults.data_dir.is_dir());
        let config = Config::load(&defaults.config_file()).unwrap();
        assert_eq!(config.name, "checklist.json");
        assert_eq!(config.data_file(), defaults.data_dir.join("checklist.json"));
    }

    #[test]
    fn test_bootstrap_keeps_existing_config() {
        let tmp = TempDir::new().unwrap();
        let defaults = Defaults::from_home(tmp.path());
        fs::create_dir_all(&defaults.config_dir).unwrap();
        fs::write(defaults.config_file(), r#"{"path": "/srv/notes", "name": "work.json"}"#).unwrap();

        bootstrap(&defaults).unwrap();

        let config = Config::load(&defaults.config_file()).unwrap();
        assert_eq!(config.path, "/srv/notes");
        assert_eq!(config.name, "work.json");
        assert!(defaults.data_dir.is_dir());
    }

    #[test]
    fn test_load_missing_config() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TodoError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_config_requires_string_fields() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("config.json");
        for bad in [r#"{"path": "/a"}"#, r#"{"path": 1, "name": "b"}"#, "[]", "nonsense"] {
            fs::write(&file, bad).unwrap();
            assert!(
                matches!(Config::load(&file), Err(TodoError::InvalidFormat { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_data_file_is_recomputed() {
        let config = Config {
            path: "/data".into(),
            name: "list.json".into(),
        };
        assert_eq!(config.data_file(), PathBuf::from("/data/list.json"));
    }

    #[test]
    fn test_data_file_concatenates_path_and_name() {
        let config = Config {
            path: "/data".into(),
            name: "/etc/x.json".into(),
        };
        assert_eq!(config.data_file(), PathBuf::from("/data/etc/x.json"));
        assert!(config.data_file().starts_with("/data"));

        let config = Config {
            path: String::new(),
            name: "x.json".into(),
        };
        assert_eq!(config.data_file(), PathBuf::from("/x.json"));

        let config = Config {
            path: "notes/".into(),
            name: "x.json".into(),
        };
        assert_eq!(config.data_file(), PathBuf::from("notes/x.json"));
    }

    #[test]
    fn test_load_non_utf8_config_is_invalid_format() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("config.json");
        fs::write(&file, [0xff, 0xfe, 0x7b]).unwrap();
        assert!(matches!(
            Config::load(&file),
            Err(TodoError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_set_fields_preserve_other_keys() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("config.json");
        fs::write(&file, r#"{"path":"A","name":"B","extra":1}"#).unwrap();

        set_path("C", &file).unwrap();
        let json = read_json(&file);
        assert_eq!(json["path"], "C");
        assert_eq!(json["name"], "B");
        assert_eq!(json["extra"], 1);

        set_name("D", &file).unwrap();
        let json = read_json(&file);
        assert_eq!(json["path"], "C");
        assert_eq!(json["name"], "D");
        assert_eq!(json["extra"], 1);
    }

    #[test]
    fn test_set_field_tolerates_missing_and_corrupt_files() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("nested").join("config.json");

        set_name("only.json", &file).unwrap();
        let json = read_json(&file);
        assert_eq!(json, serde_json::json!({"name": "only.json"}));

        fs::write(&file, "{ not json").unwrap();
        set_path("/x", &file).unwrap();
        assert_eq!(read_json(&file), serde_json::json!({"path": "/x"}));
    }

    #[test]
    fn test_config_written_with_four_space_indent() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("config.json");
        set_path("/x", &file).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "{\n    \"path\": \"/x\"\n}");
    }
}

//! Silent-failure configuration loading.
//!
//! The config file is optional by design: any failure to read or parse
//! it yields an empty section, observable only as a structured warning
//! event. Callers treat every option as optional and apply defaults at
//! the call site.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::warn;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.yml";

/// Loads job sections from the YAML config file.
///
/// The file is re-read on every call — there is no caching, so each
/// job run picks up the file as it currently is.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader for `config.yml` in the process working directory.
    pub fn new() -> Self {
        Self::from_path(CONFIG_FILE)
    }

    /// Loader for a specific config file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load a named section. Returns an empty section on any failure.
    pub fn load(&self, section: &str) -> ConfigSection {
        let root = self.load_document();
        match lookup(&root, section) {
            Some(Value::Mapping(mapping)) => ConfigSection(mapping.clone()),
            Some(_) => {
                warn!(
                    path = %self.path.display(),
                    section = section,
                    "config section is not a mapping; using empty configuration"
                );
                ConfigSection::default()
            }
            None => ConfigSection::default(),
        }
    }

    /// Load the document root as a section.
    pub fn load_root(&self) -> ConfigSection {
        ConfigSection(self.load_document())
    }

    /// Read and parse the file, logging (not raising) every failure.
    fn load_document(&self) -> Mapping {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "config file unreadable; using empty configuration"
                );
                return Mapping::new();
            }
        };
        match serde_yaml::from_str::<Value>(&raw) {
            Ok(Value::Mapping(mapping)) => mapping,
            Ok(_) => {
                warn!(
                    path = %self.path.display(),
                    "config document is not a mapping; using empty configuration"
                );
                Mapping::new()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "config parse failed; using empty configuration"
                );
                Mapping::new()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Look up a string key in a YAML mapping.
fn lookup<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping
        .iter()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

/// One section of the config document, with defensively-typed accessors.
///
/// Option values are coerced where unambiguous (a numeric string parses
/// as a number, `"true"` as a boolean); anything else reads as absent so
/// the call-site default applies instead of a junk value degrading the
/// run.
#[derive(Debug, Clone, Default)]
pub struct ConfigSection(Mapping);

impl ConfigSection {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        lookup(&self.0, key)
    }

    /// A boolean option. Accepts real booleans and the strings
    /// `"true"` / `"false"`.
    pub fn bool_opt(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// An unsigned integer option. Accepts numbers and numeric strings.
    pub fn u64_opt(&self, key: &str) -> Option<u64> {
        match self.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// A string option. Empty strings read as absent.
    pub fn str_opt(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn loader_with(content: &str) -> (NamedTempFile, ConfigLoader) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file.flush().unwrap();
        let loader = ConfigLoader::from_path(file.path());
        (file, loader)
    }

    #[test]
    fn test_load_section() {
        let (_file, loader) = loader_with(
            "issue_parser:\n  enabled: true\n  label: showcase\n  sort: updated-desc\n",
        );
        let section = loader.load("issue_parser");
        assert_eq!(section.bool_opt("enabled"), Some(true));
        assert_eq!(section.str_opt("label"), Some("showcase"));
        assert_eq!(section.str_opt("sort"), Some("updated-desc"));
    }

    #[test]
    fn test_missing_file_yields_empty_section() {
        let loader = ConfigLoader::from_path("/nonexistent/config.yml");
        let section = loader.load("issue_parser");
        assert!(section.is_empty());
        assert_eq!(section.bool_opt("enabled"), None);
    }

    #[test]
    fn test_parse_error_yields_empty_section() {
        let (_file, loader) = loader_with("issue_parser: [unclosed\n  enabled: true\n");
        assert!(loader.load("issue_parser").is_empty());
    }

    #[test]
    fn test_absent_section_is_empty() {
        let (_file, loader) = loader_with("other_section:\n  enabled: true\n");
        assert!(loader.load("issue_parser").is_empty());
    }

    #[test]
    fn test_scalar_section_is_empty() {
        let (_file, loader) = loader_with("issue_parser: yes please\n");
        assert!(loader.load("issue_parser").is_empty());
    }

    #[test]
    fn test_load_root() {
        let (_file, loader) = loader_with("enabled: true\ntimeout: 5000\n");
        let root = loader.load_root();
        assert_eq!(root.bool_opt("enabled"), Some(true));
        assert_eq!(root.u64_opt("timeout"), Some(5000));
    }

    #[test]
    fn test_numeric_string_coerces() {
        let (_file, loader) = loader_with("site_checker:\n  retry_times: \"3\"\n");
        assert_eq!(loader.load("site_checker").u64_opt("retry_times"), Some(3));
    }

    #[test]
    fn test_junk_retry_times_reads_as_absent() {
        let (_file, loader) = loader_with("site_checker:\n  retry_times: banana\n");
        let section = loader.load("site_checker");
        assert_eq!(section.u64_opt("retry_times"), None);
        assert_eq!(section.u64_opt("retry_times").unwrap_or(3), 3);
    }

    #[test]
    fn test_negative_number_reads_as_absent() {
        let (_file, loader) = loader_with("site_checker:\n  retry_times: -2\n");
        assert_eq!(loader.load("site_checker").u64_opt("retry_times"), None);
    }

    #[test]
    fn test_bool_string_coerces() {
        let (_file, loader) = loader_with("issue_parser:\n  enabled: \"true\"\n  auto_close: \"nope\"\n");
        let section = loader.load("issue_parser");
        assert_eq!(section.bool_opt("enabled"), Some(true));
        assert_eq!(section.bool_opt("auto_close"), None);
    }

    #[test]
    fn test_empty_string_option_reads_as_absent() {
        let (_file, loader) = loader_with("issue_parser:\n  label: \"\"\n");
        assert_eq!(loader.load("issue_parser").str_opt("label"), None);
    }

    #[test]
    fn test_file_is_reread_on_every_call() {
        let (mut file, loader) = loader_with("issue_parser:\n  enabled: false\n");
        assert_eq!(loader.load("issue_parser").bool_opt("enabled"), Some(false));

        // Overwrite the file in place; the next load must see the change.
        file.as_file_mut().set_len(0).unwrap();
        use std::io::Seek;
        file.as_file_mut().rewind().unwrap();
        write!(file, "issue_parser:\n  enabled: true\n").unwrap();
        file.flush().unwrap();
        assert_eq!(loader.load("issue_parser").bool_opt("enabled"), Some(true));
    }
}

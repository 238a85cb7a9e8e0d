use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum BootConfigError {
    #[error("failed to access boot config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `key=value` boot configuration. Edits are buffered until `end_transaction`.
#[derive(Debug, Default)]
pub struct BootConfig {
    path: Option<PathBuf>,
    lines: Vec<String>,
    dirty: bool,
}

fn active_entry<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let (name, value) = line.trim().split_once('=')?;
    (name.trim() == key).then(|| value.trim())
}

fn commented_entry(line: &str, key: &str) -> bool {
    line.trim()
        .strip_prefix('#')
        .and_then(|rest| active_entry(rest, key))
        .is_some()
}

impl BootConfig {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BootConfigError> {
        let path = path.into();
        let lines = match fs::read_to_string(&path) {
            Ok(raw) => raw.lines().map(str::to_string).collect(),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(BootConfigError::Io { path, source }),
        };
        Ok(Self {
            path: Some(path),
            lines,
            dirty: false,
        })
    }

    #[cfg(test)]
    pub fn in_memory(contents: &str) -> Self {
        Self {
            path: None,
            lines: contents.lines().map(str::to_string).collect(),
            dirty: false,
        }
    }

    pub fn get_value(&self, key: &str) -> Option<String> {
        self.lines
            .iter()
            .filter(|line| !line.trim_start().starts_with('#'))
            .find_map(|line| active_entry(line, key))
            .map(str::to_string)
    }

    /// `None` comments the entry out instead of deleting it.
    pub fn set_value(&mut self, key: &str, value: Option<&str>) {
        let active = self
            .lines
            .iter()
            .position(|line| !line.trim_start().starts_with('#') && active_entry(line, key).is_some());
        match (value, active) {
            (Some(value), Some(index)) => {
                let replacement = format!("{key}={value}");
                if self.lines[index] != replacement {
                    self.lines[index] = replacement;
                    self.dirty = true;
                }
            }
            (Some(value), None) => {
                let replacement = format!("{key}={value}");
                match self.lines.iter().position(|line| commented_entry(line, key)) {
                    Some(index) => self.lines[index] = replacement,
                    None => self.lines.push(replacement),
                }
                self.dirty = true;
            }
            (None, Some(index)) => {
                let line = self.lines[index].trim().to_string();
                self.lines[index] = format!("#{line}");
                self.dirty = true;
            }
            (None, None) => {}
        }
        debug!(key, ?value, "boot config edit");
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes buffered edits, if any.
    pub fn end_transaction(&mut self) -> Result<(), BootConfigError> {
        if !self.is_dirty() {
            return Ok(());
        }
        if let Some(path) = self.path.as_ref() {
            let mut raw = self.contents();
            raw.push('\n');
            fs::write(path, raw).map_err(|source| BootConfigError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "boot config written");
        }
        self.dirty = false;
        Ok(())
    }

    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::BootConfig;
    use std::fs;

    #[test]
    fn set_replaces_existing_and_appends_new_keys() {
        let mut config = BootConfig::in_memory("# comment\nhdmi_drive=1\n");
        config.set_value("hdmi_drive", Some("2"));
        config.set_value("arm_freq", Some("950"));
        assert_eq!(config.contents(), "# comment\nhdmi_drive=2\narm_freq=950");
        assert_eq!(config.get_value("arm_freq").as_deref(), Some("950"));
    }

    #[test]
    fn unset_comments_out_and_set_revives_commented_line() {
        let mut config = BootConfig::in_memory("hdmi_ignore_edid_audio=1");
        config.set_value("hdmi_ignore_edid_audio", None);
        assert_eq!(config.contents(), "#hdmi_ignore_edid_audio=1");
        assert_eq!(config.get_value("hdmi_ignore_edid_audio"), None);

        config.set_value("hdmi_ignore_edid_audio", Some("1"));
        assert_eq!(config.contents(), "hdmi_ignore_edid_audio=1");
    }

    #[test]
    fn unchanged_value_is_not_dirty() {
        let mut config = BootConfig::in_memory("hdmi_drive=2");
        config.set_value("hdmi_drive", Some("2"));
        config.set_value("missing", None);
        assert!(!config.is_dirty());
    }

    #[test]
    fn end_transaction_writes_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        fs::write(&path, "disable_overscan=0\n").unwrap();

        let mut config = BootConfig::open(&path).unwrap();
        config.set_value("disable_overscan", Some("1"));
        config.end_transaction().unwrap();
        assert!(!config.is_dirty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "disable_overscan=1\n");
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = BootConfig::open(dir.path().join("absent.txt")).unwrap();
        assert_eq!(config.get_value("hdmi_drive"), None);
    }
}

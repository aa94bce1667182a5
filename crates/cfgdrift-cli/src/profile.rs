use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

/// Administrative database the handshake expects unless a profile
/// overrides it.
pub const DEFAULT_ADMIN_DATABASE: &str = "SYSTEMDB";

/// One store connection profile — the credential reference the CLI takes
/// instead of inline connection details.
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    /// Store directory this profile connects to.
    pub store: PathBuf,
    /// Administrative database the session must be opened to.
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    DEFAULT_ADMIN_DATABASE.to_string()
}

/// The profiles file: a TOML table of named profiles.
///
/// ```toml
/// [profiles.prod]
/// store = "/var/lib/cfgdrift/prod"
/// database = "SYSTEMDB"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Profiles {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Profiles {
    /// Load and parse a profiles file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CliError::Profile(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&text)
            .map_err(|e| CliError::Profile(format!("cannot parse {}: {e}", path.display())))
    }

    /// Look up a profile by name.
    pub fn resolve(&self, name: &str) -> Result<&Profile, CliError> {
        self.profiles
            .get(name)
            .ok_or_else(|| CliError::Profile(format!("no such profile: {name}")))
    }
}

/// The default profiles file location: `$CFGDRIFT_PROFILES`, then
/// `~/.config/cfgdrift/profiles.toml`.
pub fn default_path() -> PathBuf {
    if let Ok(path) = env::var("CFGDRIFT_PROFILES") {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".config/cfgdrift/profiles.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_profiles(text: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), text).unwrap();
        file
    }

    #[test]
    fn load_and_resolve() {
        let file = write_profiles(
            r#"
            [profiles.prod]
            store = "/var/lib/cfgdrift/prod"

            [profiles.qa]
            store = "/var/lib/cfgdrift/qa"
            database = "QADB"
            "#,
        );
        let profiles = Profiles::load(file.path()).unwrap();

        let prod = profiles.resolve("prod").unwrap();
        assert_eq!(prod.store, PathBuf::from("/var/lib/cfgdrift/prod"));
        assert_eq!(prod.database, DEFAULT_ADMIN_DATABASE);

        let qa = profiles.resolve("qa").unwrap();
        assert_eq!(qa.database, "QADB");
    }

    #[test]
    fn missing_file_is_profile_error() {
        let err = Profiles::load(Path::new("/nonexistent/profiles.toml")).unwrap_err();
        assert!(matches!(err, CliError::Profile(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn malformed_file_is_profile_error() {
        let file = write_profiles("profiles = 3");
        assert!(matches!(
            Profiles::load(file.path()),
            Err(CliError::Profile(_))
        ));
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let file = write_profiles("[profiles.a]\nstore = \"/tmp/a\"");
        let profiles = Profiles::load(file.path()).unwrap();
        let err = profiles.resolve("b").unwrap_err();
        assert!(matches!(err, CliError::Profile(_)));
    }
}

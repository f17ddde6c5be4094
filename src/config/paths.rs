//! Platform-specific location of `claude_desktop_config.json`

use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "Claude";
const CONFIG_FILE: &str = "claude_desktop_config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    /// macOS and everything else; Claude Desktop uses the macOS layout.
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

/// Snapshot of the environment inputs path resolution depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathEnv {
    pub appdata: Option<OsString>,
    pub home: Option<PathBuf>,
}

impl PathEnv {
    /// Read `APPDATA` and the home directory from the process environment.
    pub fn capture() -> Self {
        let appdata = std::env::var_os("APPDATA");

        #[cfg(target_os = "windows")]
        let home = std::env::var_os("USERPROFILE").or_else(|| std::env::var_os("HOME"));
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var_os("HOME");

        Self { appdata, home: home.filter(|h| !h.is_empty()).map(PathBuf::from) }
    }
}

/// Resolve the config file path for `platform` given `env`.
///
/// Never fails: without a home directory the path is built relative to the
/// empty path.
pub fn resolve_path(platform: Platform, env: &PathEnv) -> PathBuf {
    let home = env.home.clone().unwrap_or_default();

    let app_root = match platform {
        Platform::Windows => match env.appdata.as_ref().filter(|a| !a.is_empty()) {
            Some(appdata) => PathBuf::from(appdata),
            None => home.join("AppData").join("Roaming"),
        },
        Platform::Other => home.join("Library").join("Application Support"),
    };

    app_root.join(APP_DIR).join(CONFIG_FILE)
}

/// Resolve the path for the running platform and process environment.
pub fn default_config_path() -> PathBuf {
    let path = resolve_path(Platform::current(), &PathEnv::capture());
    tracing::debug!("Resolved Claude Desktop config path: {}", path.display());
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn env(appdata: Option<&str>, home: Option<&str>) -> PathEnv {
        PathEnv { appdata: appdata.map(OsString::from), home: home.map(PathBuf::from) }
    }

    #[test]
    fn windows_uses_appdata() {
        let path = resolve_path(Platform::Windows, &env(Some("/c/Users/me/AppData/Roaming"), None));
        assert_eq!(
            path,
            Path::new("/c/Users/me/AppData/Roaming").join("Claude").join("claude_desktop_config.json")
        );
    }

    #[test]
    fn windows_falls_back_to_roaming_under_home() {
        let expected = Path::new("/c/Users/me")
            .join("AppData")
            .join("Roaming")
            .join("Claude")
            .join("claude_desktop_config.json");

        assert_eq!(resolve_path(Platform::Windows, &env(None, Some("/c/Users/me"))), expected);
        assert_eq!(resolve_path(Platform::Windows, &env(Some(""), Some("/c/Users/me"))), expected);
    }

    #[test]
    fn other_platforms_use_application_support() {
        let path = resolve_path(Platform::Other, &env(Some("ignored"), Some("/Users/me")));
        assert_eq!(
            path,
            Path::new("/Users/me")
                .join("Library")
                .join("Application Support")
                .join("Claude")
                .join("claude_desktop_config.json")
        );
    }

    #[test]
    fn missing_home_yields_relative_path() {
        let path = resolve_path(Platform::Other, &PathEnv::default());
        assert!(path.is_relative());
        assert!(path.ends_with("Claude/claude_desktop_config.json"));
    }
}

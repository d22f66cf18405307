//! Path helpers for the Zellij sandbox, where `~` on the host is `/host`.

use std::path::PathBuf;

/// Returns the plugin's data directory, `/host/.local/share/zellij/admintable`.
///
/// `/host` is the cwd of the last focused terminal, usually the home
/// directory, so this normally lands in `~/.local/share/zellij/admintable`.
/// The trace file lives here.
///
/// # Examples
///
/// ```
/// use admintable::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/admintable"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("admintable")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option, which users write as a host path.
///
/// # Examples
///
/// ```
/// use admintable::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_users_homes_are_left_alone() {
        assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
    }

    #[test]
    fn relative_paths_are_unchanged() {
        assert_eq!(expand_tilde("themes/x.toml"), "themes/x.toml");
    }
}

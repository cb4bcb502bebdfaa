use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the path to avoid repeated environment lookups
static PROCHARIOT_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the proChariot home directory
/// Checks PROCHARIOT_HOME environment variable, falls back to ${HOME}/.prochariot
pub fn prochariot_home() -> PathBuf {
    PROCHARIOT_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("PROCHARIOT_HOME") {
                PathBuf::from(path)
            } else {
                let home = std::env::var("HOME").unwrap_or_else(|_| {
                    std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
                });
                PathBuf::from(home).join(".prochariot")
            }
        })
        .clone()
}

/// Location of the user configuration file
pub fn config_path() -> PathBuf {
    prochariot_home().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_inside_home() {
        let path = config_path();
        assert!(path.ends_with("config.toml"));
        assert_eq!(path.parent(), Some(prochariot_home().as_path()));
    }
}

//! Database location.
//!
//! Resolution order: `--db` flag, then `CONTACTMGR_DB`, then the platform
//! config directory.

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

use crate::db::DATABASE_FILE_NAME;

const ENV_DB_PATH: &str = "CONTACTMGR_DB";
const APP_DIR: &str = "contactmgr";

/// Resolve the database path, giving an explicit path precedence.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_with(explicit, env::var_os(ENV_DB_PATH).map(PathBuf::from), dirs::config_dir())
}

fn resolve_with(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path);
    }
    let config_dir = config_dir.ok_or_else(|| anyhow!("Could not find config directory"))?;
    Ok(config_dir.join(APP_DIR).join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_with(
            Some(PathBuf::from("/tmp/a.db")),
            Some(PathBuf::from("/tmp/b.db")),
            Some(PathBuf::from("/home/me/.config")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/a.db"));
    }

    #[test]
    fn test_env_path_before_config_dir() {
        let path = resolve_with(
            None,
            Some(PathBuf::from("/tmp/b.db")),
            Some(PathBuf::from("/home/me/.config")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/b.db"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let path = resolve_with(
            None,
            Some(PathBuf::new()),
            Some(PathBuf::from("/home/me/.config")),
        )
        .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/me/.config/contactmgr/ContactManager.db")
        );
    }

    #[test]
    fn test_no_config_dir() {
        assert!(resolve_with(None, None, None).is_err());
    }
}

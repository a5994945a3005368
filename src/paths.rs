//! Expansion of user-supplied paths before they reach the core.

use std::collections::HashMap;
use std::path::PathBuf;

/// Home directory and environment variables captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub home: Option<PathBuf>,
    pub vars: HashMap<String, String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            home: dirs::home_dir(),
            vars: std::env::vars().collect(),
        }
    }

    /// Expands `~`, `$VAR` and `${VAR}` in `path` and makes it absolute.
    ///
    /// Unknown variables are left as written.
    pub fn expand(&self, path: &str) -> PathBuf {
        let expanded = shellexpand::full_with_context_no_errors(
            path,
            || self.home.as_deref().map(|home| home.to_string_lossy().into_owned()),
            |name| self.vars.get(name),
        );
        let path = PathBuf::from(expanded.into_owned());
        std::path::absolute(&path).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment {
            home: Some(PathBuf::from("/home/alice")),
            vars: HashMap::from([
                ("SSH_DIR".to_string(), "/etc/ssh".to_string()),
                ("USER".to_string(), "alice".to_string()),
            ]),
        }
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(env().expand("~/.ssh/config"), PathBuf::from("/home/alice/.ssh/config"));
        assert_eq!(env().expand("~"), PathBuf::from("/home/alice"));
    }

    #[test]
    fn test_expand_vars() {
        assert_eq!(env().expand("$SSH_DIR/config"), PathBuf::from("/etc/ssh/config"));
        assert_eq!(
            env().expand("/home/${USER}/x"),
            PathBuf::from("/home/alice/x")
        );
    }

    #[test]
    fn test_unknown_vars_left_alone() {
        assert_eq!(env().expand("/a/$NOPE/b"), PathBuf::from("/a/$NOPE/b"));
        assert_eq!(env().expand("/a/${NOPE}/b"), PathBuf::from("/a/${NOPE}/b"));
        assert_eq!(env().expand("/a/$"), PathBuf::from("/a/$"));
    }

    #[test]
    fn test_tilde_then_vars() {
        assert_eq!(
            env().expand("~/$USER.conf"),
            PathBuf::from("/home/alice/alice.conf")
        );
    }

    #[test]
    fn test_relative_becomes_absolute() {
        let expanded = env().expand("relative/config");
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("relative/config"));
    }

    #[test]
    fn test_no_home() {
        let env = Environment::default();
        assert!(env.expand("~/x").ends_with("~/x"));
    }
}

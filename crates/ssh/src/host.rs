//! SSH host alias type.

/// A single alias declared by a `Host` directive.
///
/// Aliases are whitespace-split tokens, so `name` never contains whitespace.
/// The catch-all alias `*` is never turned into a `HostEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// The alias as written in the config file.
    pub name: String,
}

impl HostEntry {
    /// The wildcard alias that matches every host.
    pub const WILDCARD: &'static str = "*";

    /// Creates an entry for `alias`, or `None` for the bare wildcard.
    pub fn from_alias(alias: &str) -> Option<Self> {
        if alias == Self::WILDCARD {
            return None;
        }

        Some(Self {
            name: alias.to_string(),
        })
    }

    /// Returns the command that connects to this host: `ssh {name}`.
    #[must_use]
    pub fn command(&self) -> String {
        format!("ssh {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_command() {
        let host = HostEntry::from_alias("prod-server").unwrap();
        assert_eq!(host.command(), "ssh prod-server");
    }

    #[test]
    fn test_wildcard_is_not_an_entry() {
        assert!(HostEntry::from_alias("*").is_none());
    }

    #[test]
    fn test_patterns_other_than_bare_wildcard_are_kept() {
        let host = HostEntry::from_alias("*.example.com").unwrap();
        assert_eq!(host.name, "*.example.com");
    }
}

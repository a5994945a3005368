use crate::cli::Arguments;
use crate::paths::Environment;
use config::{Config, OutputMode};
use std::path::PathBuf;

/// Fully resolved parameters for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SSH config file to read.
    pub ssh_config: PathBuf,
    /// Directory that receives the profile files.
    pub output_dir: PathBuf,
    /// Parent profile for every generated profile.
    pub parent_profile: String,
    /// Output layout.
    pub mode: OutputMode,
    /// File name used in single-file mode.
    pub file_name: String,
}

impl Settings {
    /// Default SSH config location.
    pub const DEFAULT_SSH_CONFIG: &'static str = "~/.ssh/config";
    /// Default iTerm2 dynamic profiles directory.
    pub const DEFAULT_OUTPUT_DIR: &'static str =
        "~/Library/Application Support/iTerm2/DynamicProfiles";
    /// Default parent profile name.
    pub const DEFAULT_PARENT_PROFILE: &'static str = "Default";

    /// Merges command-line flags over the settings file over defaults.
    pub fn merge(args: &Arguments, config: Config, env: &Environment) -> Self {
        let ssh_config = args
            .config
            .clone()
            .or(config.ssh_config)
            .unwrap_or_else(|| Self::DEFAULT_SSH_CONFIG.to_string());

        let output_dir = args
            .output_dir
            .clone()
            .or(config.output_dir)
            .unwrap_or_else(|| Self::DEFAULT_OUTPUT_DIR.to_string());

        Settings {
            ssh_config: env.expand(&ssh_config),
            output_dir: env.expand(&output_dir),
            parent_profile: args
                .parent_profile
                .clone()
                .or(config.parent_profile)
                .unwrap_or_else(|| Self::DEFAULT_PARENT_PROFILE.to_string()),
            mode: args.mode().or(config.mode).unwrap_or_default(),
            file_name: config
                .file_name
                .unwrap_or_else(|| profile::DEFAULT_FILE_NAME.to_string()),
        }
    }

    /// Target of single-file output.
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(flags: &[&str]) -> Arguments {
        Arguments::try_parse_from(std::iter::once("ssh2iterm").chain(flags.iter().copied()))
            .unwrap()
    }

    fn env() -> Environment {
        Environment {
            home: Some(PathBuf::from("/home/alice")),
            ..Environment::default()
        }
    }

    #[test]
    fn test_builtin_defaults() {
        let settings = Settings::merge(&args(&[]), Config::default(), &env());

        assert_eq!(settings.ssh_config, PathBuf::from("/home/alice/.ssh/config"));
        assert_eq!(
            settings.output_dir,
            PathBuf::from("/home/alice/Library/Application Support/iTerm2/DynamicProfiles")
        );
        assert_eq!(settings.parent_profile, "Default");
        assert_eq!(settings.mode, OutputMode::Single);
        assert_eq!(
            settings.output_file(),
            PathBuf::from(
                "/home/alice/Library/Application Support/iTerm2/DynamicProfiles/ssh-hosts.json"
            )
        );
    }

    #[test]
    fn test_settings_file_overrides_defaults() {
        let config = Config {
            ssh_config: Some("/etc/ssh/ssh_config".into()),
            parent_profile: Some("Dark".into()),
            mode: Some(OutputMode::Multi),
            file_name: Some("hosts.json".into()),
            ..Config::default()
        };
        let settings = Settings::merge(&args(&[]), config, &env());

        assert_eq!(settings.ssh_config, PathBuf::from("/etc/ssh/ssh_config"));
        assert_eq!(settings.parent_profile, "Dark");
        assert_eq!(settings.mode, OutputMode::Multi);
        assert_eq!(settings.file_name, "hosts.json");
    }

    #[test]
    fn test_flags_override_settings_file() {
        let config = Config {
            output_dir: Some("/from/file".into()),
            parent_profile: Some("Dark".into()),
            mode: Some(OutputMode::Multi),
            ..Config::default()
        };
        let settings = Settings::merge(
            &args(&[
                "--output-dir",
                "/from/flag",
                "--parent-profile",
                "Light",
                "--single-file",
            ]),
            config,
            &env(),
        );

        assert_eq!(settings.output_dir, PathBuf::from("/from/flag"));
        assert_eq!(settings.parent_profile, "Light");
        assert_eq!(settings.mode, OutputMode::Single);
    }
}

use clap::Parser;
use config::OutputMode;

const VERSION: &str = concat!(
    env!("SSH2ITERM_VERSION"),
    " ",
    env!("SSH2ITERM_BUILD_HASH")
);

const EXAMPLES: &str = "\
Examples:
  ssh2iterm
  ssh2iterm --config ~/.ssh/work_config
  ssh2iterm --multi-file --output-dir ~/profiles
  ssh2iterm --parent-profile \"My Theme\" --yes";

#[derive(Debug, Parser)]
#[command(
    name = "ssh2iterm",
    version = VERSION,
    about = "Convert SSH config Host entries to iTerm2 dynamic profiles",
    after_help = EXAMPLES
)]
pub struct Arguments {
    /// Path to SSH config file [default: ~/.ssh/config]
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Output directory for profile files
    /// [default: ~/Library/Application Support/iTerm2/DynamicProfiles]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Write all profiles to a single file (default)
    #[arg(long, conflicts_with = "multi_file")]
    pub single_file: bool,

    /// Write each profile to its own file
    #[arg(long)]
    pub multi_file: bool,

    /// Parent profile name for all generated profiles [default: Default]
    #[arg(long, value_name = "NAME")]
    pub parent_profile: Option<String>,

    /// Settings file [default: ~/.ssh2iterm.json]
    #[arg(long, value_name = "PATH")]
    pub settings: Option<String>,

    /// Write a default settings file and exit
    #[arg(long, conflicts_with = "settings_schema")]
    pub init_settings: bool,

    /// Print the settings file JSON schema and exit
    #[arg(long)]
    pub settings_schema: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose output (default)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable verbose output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    /// Output mode requested on the command line, if any.
    pub fn mode(&self) -> Option<OutputMode> {
        if self.multi_file {
            Some(OutputMode::Multi)
        } else if self.single_file {
            Some(OutputMode::Single)
        } else {
            None
        }
    }

    /// `--quiet` wins over `--verbose`.
    pub fn is_verbose(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Arguments {
        Arguments::try_parse_from(std::iter::once("ssh2iterm").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.config.is_none());
        assert!(args.mode().is_none());
        assert!(args.is_verbose());
        assert!(!args.yes);
    }

    #[test]
    fn test_multi_file_mode() {
        assert_eq!(parse(&["--multi-file"]).mode(), Some(OutputMode::Multi));
        assert_eq!(parse(&["--single-file"]).mode(), Some(OutputMode::Single));
    }

    #[test]
    fn test_modes_conflict() {
        let result =
            Arguments::try_parse_from(["ssh2iterm", "--single-file", "--multi-file"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_wins() {
        assert!(!parse(&["-v", "-q"]).is_verbose());
    }

    #[test]
    fn test_values() {
        let args = parse(&[
            "--config",
            "/etc/ssh/config",
            "--parent-profile",
            "My Theme",
            "-y",
        ]);
        assert_eq!(args.config.as_deref(), Some("/etc/ssh/config"));
        assert_eq!(args.parent_profile.as_deref(), Some("My Theme"));
        assert!(args.yes);
    }
}

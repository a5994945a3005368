use crate::settings::Settings;
use anyhow::Result;
use config::OutputMode;
use profile::{GuidSource, generate, write_multi_file, write_single_file};
use ssh::{ResolveOptions, Resolver};
use std::path::PathBuf;
use tracing::{info, warn};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Profiles were written.
    Written(Report),
    /// The SSH config yielded no host entries.
    NoHosts,
    /// The user declined the confirmation prompt.
    Cancelled,
}

/// Summary of a successful run.
#[derive(Debug)]
pub struct Report {
    /// Number of host entries found.
    pub hosts: usize,
    /// Output file (single-file mode) or directory (multi-file mode).
    pub target: PathBuf,
    /// Files written, in profile order.
    pub written: Vec<PathBuf>,
    /// Number of non-fatal diagnostics raised while resolving.
    pub diagnostics: usize,
}

/// Resolves, generates and writes profiles.
///
/// `confirm` is called with the number of profiles before anything is
/// written; returning `false` cancels the run.
///
/// # Errors
///
/// Returns an error if the SSH config is missing, the prompt fails, or
/// writing the output fails.
pub fn run(
    settings: &Settings,
    home_dir: Option<PathBuf>,
    guids: &mut impl GuidSource,
    confirm: impl FnOnce(usize) -> Result<bool>,
) -> Result<Outcome> {
    info!("Parsing SSH config {}", settings.ssh_config.display());

    let resolver = Resolver::new(ResolveOptions {
        home_dir,
        ..ResolveOptions::default()
    });
    let resolution = resolver.resolve(&settings.ssh_config)?;

    for file in &resolution.files {
        info!("  Parsed: {}", file.display());
    }
    for diagnostic in &resolution.diagnostics {
        warn!("{diagnostic}");
    }

    if resolution.hosts.is_empty() {
        return Ok(Outcome::NoHosts);
    }

    info!("Found {} Host entries:", resolution.hosts.len());
    for (i, host) in resolution.hosts.iter().enumerate() {
        info!("  {}. {}", i + 1, host.name);
    }

    let profiles = generate(&resolution.hosts, &settings.parent_profile, guids);

    if !confirm(profiles.len())? {
        return Ok(Outcome::Cancelled);
    }

    let (target, written) = match settings.mode {
        OutputMode::Single => {
            let path = write_single_file(&profiles, &settings.output_file())?;
            (path.clone(), vec![path])
        }
        OutputMode::Multi => (
            settings.output_dir.clone(),
            write_multi_file(&profiles, &settings.output_dir)?,
        ),
    };

    Ok(Outcome::Written(Report {
        hosts: resolution.hosts.len(),
        target,
        written,
        diagnostics: resolution.diagnostics.len(),
    }))
}

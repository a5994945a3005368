mod app;
mod cli;
mod paths;
mod settings;

use anyhow::{Context, Result};
use app::{Outcome, Report};
use clap::Parser;
use cli::Arguments;
use config::{Config, OutputMode};
use dialoguer::Confirm;
use paths::Environment;
use profile::RandomGuids;
use settings::Settings;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Exit status when the SSH config holds no usable hosts.
const EXIT_NO_HOSTS: u8 = 3;

fn main() -> ExitCode {
    let args = Arguments::parse();

    if args.settings_schema {
        println!("{}", config::schema());
        return ExitCode::SUCCESS;
    }

    init_logging(args.is_verbose());
    let env = Environment::from_process();

    let result = if args.init_settings {
        init_settings(&args, &env).map(|()| None)
    } else {
        convert(&args, &env).map(Some)
    };

    match result {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(Outcome::Written(report))) => {
            if args.is_verbose() {
                print_summary(&report);
            }
            ExitCode::SUCCESS
        }
        Ok(Some(Outcome::NoHosts)) => {
            println!("No Host entries found in SSH config.");
            ExitCode::from(EXIT_NO_HOSTS)
        }
        Ok(Some(Outcome::Cancelled)) => {
            println!("Cancelled by user.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_filter(filter),
        )
        .init();
}

fn init_settings(args: &Arguments, env: &Environment) -> Result<()> {
    let path = match &args.settings {
        Some(path) => env.expand(path),
        None => config::config_path().context("could not determine home directory")?,
    };

    if config::ensure_config_exists(&path)? {
        println!("Created default settings at {}", path.display());
    } else {
        println!("Settings already exist at {}", path.display());
    }

    Ok(())
}

fn convert(args: &Arguments, env: &Environment) -> Result<Outcome> {
    let config = load_config(args, env)?;
    let settings = Settings::merge(args, config, env);

    info!("SSH config: {}", settings.ssh_config.display());
    info!("Output directory: {}", settings.output_dir.display());
    info!(
        "Output mode: {}",
        match settings.mode {
            OutputMode::Single => "single-file",
            OutputMode::Multi => "multi-file",
        }
    );
    info!("Parent profile: {}", settings.parent_profile);

    let skip_prompt = args.yes;
    app::run(&settings, env.home.clone(), &mut RandomGuids, |count| {
        if skip_prompt {
            return Ok(true);
        }
        confirm(count)
    })
}

/// Loads the settings file. A missing file is only an error when it was
/// named explicitly with `--settings`.
fn load_config(args: &Arguments, env: &Environment) -> Result<Config> {
    match &args.settings {
        Some(path) => {
            let path = env.expand(path);
            config::load_from_path(&path)
                .with_context(|| format!("invalid settings file {}", path.display()))
        }
        None => Ok(config::load()
            .context("invalid settings file")?
            .unwrap_or_default()),
    }
}

fn confirm(count: usize) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Ready to write {count} profile(s). Proceed?"))
        .default(true)
        .interact()
        .context("confirmation prompt failed (pass --yes to skip it)")
}

fn print_summary(report: &Report) {
    if report.written.len() > 1 {
        for path in &report.written {
            println!("  Wrote: {}", path.display());
        }
    }

    println!(
        "Wrote {} profile(s) to: {}",
        report.hosts,
        report.target.display()
    );

    if report.diagnostics > 0 {
        println!(
            "{} warning(s) while reading the SSH config.",
            report.diagnostics
        );
    }
}

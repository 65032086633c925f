// core/env-profile/src/bin/render-profile.rs
// Writes an environment profile for a build pipeline, or checks a module file against it

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mcs_common::init_console_logging;
use mcs_env_profile::{check_module, render, EnvProfile, RenderFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Module,
    Dotenv,
    Json,
}

impl From<Format> for RenderFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Module => RenderFormat::Module,
            Format::Dotenv => RenderFormat::Dotenv,
            Format::Json => RenderFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "render-profile", version, about = "Render the MCS environment profile")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "module")]
    format: Format,

    /// Environment variant to render
    #[arg(long, env = "MCS_ENV", default_value = "test")]
    variant: String,

    /// Check an existing module file against the profile instead of rendering
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_console_logging("render-profile");

    let profile = EnvProfile::for_name(&cli.variant)
        .with_context(|| format!("cannot load profile for {}", cli.variant))?;

    if let Some(path) = cli.check {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let differing = check_module(&text, &profile)
            .with_context(|| format!("cannot parse {}", path.display()))?;

        if differing.is_empty() {
            tracing::info!(file = %path.display(), variant = %cli.variant, "module matches profile");
            return Ok(ExitCode::SUCCESS);
        }

        for key in &differing {
            tracing::error!(
                file = %path.display(),
                key = %key,
                expected = %profile.get(*key),
                "value differs from profile"
            );
        }
        return Ok(ExitCode::FAILURE);
    }

    let rendered = render(&profile, cli.format.into())?;
    print!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

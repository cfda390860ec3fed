use {
  anyhow::{Context, Result},
  clap::Parser,
  std::{path::PathBuf, process::ExitCode},
  vscode_debug_settings::{
    logging,
    settings::{SettingsMerger, DEFAULT_SUPPLEMENT_PATH, DEFAULT_TARGET_PATH},
  },
};

/// Merge editor debug settings into a VS Code settings file
#[derive(Parser, Debug)]
#[command(name = "add-debug-settings", version)]
struct Cli {
  /// JSON object whose keys are added to the settings
  #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SUPPLEMENT_PATH)]
  supplement: PathBuf,

  /// Settings file to create or update
  #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TARGET_PATH)]
  target: PathBuf,

  /// Only report problems
  #[arg(short, long)]
  quiet: bool,

  /// More output, repeat for more
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,

  /// Prefix log lines with a timestamp
  #[arg(long)]
  timestamps: bool,
}

fn run(cli: &Cli) -> Result<()> {
  logging::setup(logging::level(cli.quiet, cli.verbose), cli.timestamps, std::io::stdout())
    .context("Failed to set up logging")?;
  SettingsMerger::new()
    .supplement(&cli.supplement)
    .target(&cli.target)
    .merge()
    .with_context(|| format!("Failed to update {}", cli.target.display()))?;
  Ok(())
}

fn main() -> ExitCode {
  match run(&Cli::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {:?}", err);
      ExitCode::FAILURE
    },
  }
}

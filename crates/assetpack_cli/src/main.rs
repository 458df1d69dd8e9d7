mod args;
mod types;

use std::process::ExitCode;

use ansi_term::Colour;
use args::{InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use assetpack::{load_options, BuildMode, BuildResult, PlannedArtifact, ResolvedConfig, Resolver};
use types::report_format::ReportFormat;

#[derive(Parser)]
#[command(version, about = "Resolve a front-end build descriptor for a bundler engine", long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn init_logging() {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("assetpack=info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn create_resolver(input: InputArgs) -> BuildResult<Resolver> {
  match input.config {
    Some(path) => Resolver::new(load_options(&path)?),
    None => {
      let cwd = match input.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().map_err(anyhow::Error::from)?,
      };
      Ok(Resolver::card_editor(cwd))
    }
  }
}

fn print_summary(config: &ResolvedConfig) {
  let artifacts = config.planned_artifacts();
  let left =
    artifacts.iter().map(|artifact| artifact.filename.to_string_lossy().len()).max().unwrap_or(0);

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for PlannedArtifact { filename, kind } in artifacts {
    let filename = filename.to_string_lossy();
    println!(
      "{}{}{:pad$} {}",
      dim.paint("<DIR>/"),
      color.paint(&*filename),
      "",
      dim.paint(kind.as_str()),
      pad = left - filename.len()
    );
  }

  println!(
    "\n{} {} build into {}",
    Colour::Green.paint("✔"),
    Colour::White.bold().paint(config.mode.as_str()),
    config.output.path.display()
  );
}

fn main() -> ExitCode {
  let args = Commands::parse();
  init_logging();

  let mode = BuildMode::from_arg(args.input.mode.as_deref());
  tracing::debug!(requested = ?args.input.mode, effective = %mode, "parsed build mode");
  let resolver = match create_resolver(args.input) {
    Ok(resolver) => resolver,
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      return ExitCode::FAILURE;
    }
  };

  let config = resolver.resolve(Some(mode));
  match args.output.format {
    ReportFormat::Json => match serde_json::to_string_pretty(&config) {
      Ok(json) => println!("{json}"),
      Err(error) => {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
        return ExitCode::FAILURE;
      }
    },
    ReportFormat::Summary => print_summary(&config),
  }

  ExitCode::SUCCESS
}

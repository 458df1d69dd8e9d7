use std::path::PathBuf;

use clap::Args;

use crate::types::report_format::ReportFormat;

#[derive(Args)]
pub struct InputArgs {
  /// `production` for a minified build; anything else, or nothing, builds for development.
  #[clap(long, short = 'm')]
  pub mode: Option<String>,

  /// JSON build descriptor. The card editor descriptor is used when omitted.
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// Directory the card editor descriptor resolves its paths against. A `--config` file
  /// resolves against its own directory, so the two can't be combined.
  #[clap(long, conflicts_with = "config")]
  pub cwd: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'f', value_enum, default_value_t)]
  pub format: ReportFormat,
}

use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ReportFormat {
  /// The resolved config, for the bundler engine.
  #[default]
  Json,
  /// The files a build is expected to write.
  Summary,
}

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
  Chunk,
  /// Only written if the bundle imports any css.
  ExtractedCss,
  SourceMap,
  Copied,
}

impl ArtifactKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Chunk => "chunk",
      Self::ExtractedCss => "css",
      Self::SourceMap => "source map",
      Self::Copied => "copied",
    }
  }
}

/// A file the engine is expected to write, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedArtifact {
  pub filename: PathBuf,
  pub kind: ArtifactKind,
}

use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

/// Every problem found while loading or normalizing a descriptor, so callers can report them all
/// at once instead of fixing one per run.
#[derive(Debug, Default)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// `Ok(())` when nothing was collected.
  pub fn into_result(self) -> BuildResult<()> {
    if self.0.is_empty() {
      Ok(())
    } else {
      Err(self)
    }
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, error) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

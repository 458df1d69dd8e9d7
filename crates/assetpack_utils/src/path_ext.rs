use std::{
  borrow::Cow,
  ffi::OsStr,
  path::{Component, Path, PathBuf},
};

use sugar_path::SugarPath;

pub trait PathExt {
  /// File stem used to name a bundle whose entry was declared without a name.
  fn representative_file_name(&self) -> Cow<str>;

  /// The path with its leading `.` and `..` components dropped, i.e. the part that survives when
  /// the file is re-rooted somewhere else.
  fn without_relative_prefix(&self) -> PathBuf;

  /// `self` joined onto `base` and normalized, unless it is already absolute.
  fn resolve_against(&self, base: &Path) -> PathBuf;
}

impl PathExt for Path {
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), OsStr::to_string_lossy);

    match &*file_name {
      // `src/editor/index.ts` reads better as `editor` than as `index`.
      "index" | "main" => self
        .parent()
        .and_then(Path::file_name)
        .map_or(file_name, OsStr::to_string_lossy),
      _ => file_name,
    }
  }

  fn without_relative_prefix(&self) -> PathBuf {
    self
      .components()
      .skip_while(|component| matches!(component, Component::CurDir | Component::ParentDir))
      .collect()
  }

  fn resolve_against(&self, base: &Path) -> PathBuf {
    if self.is_absolute() {
      self.normalize()
    } else {
      base.join(self).normalize()
    }
  }
}

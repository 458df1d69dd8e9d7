use serde::Deserialize;

/// One entry point. Without a name, the bundle is named after the entry file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawInputItem")]
pub struct InputItem {
  pub name: Option<String>,
  pub import: String,
}

impl InputItem {
  pub fn named(name: impl Into<String>, import: impl Into<String>) -> Self {
    Self { name: Some(name.into()), import: import.into() }
  }
}

impl From<&str> for InputItem {
  fn from(value: &str) -> Self {
    Self { name: None, import: value.to_string() }
  }
}

impl From<String> for InputItem {
  fn from(value: String) -> Self {
    Self { name: None, import: value }
  }
}

/// Entries may be written as a bare path or as `{ "name", "import" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInputItem {
  Import(String),
  Named { name: Option<String>, import: String },
}

impl From<RawInputItem> for InputItem {
  fn from(value: RawInputItem) -> Self {
    match value {
      RawInputItem::Import(import) => import.into(),
      RawInputItem::Named { name, import } => Self { name, import },
    }
  }
}

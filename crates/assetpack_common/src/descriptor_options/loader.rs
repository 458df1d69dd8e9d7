use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A processor in a loader chain, identified by the name the bundler engine knows it by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Loader {
  /// TypeScript to JavaScript.
  Ts,
  /// Injects CSS into the document at runtime.
  Style,
  /// Pulls CSS out into its own file. Needs the css extraction plugin to be registered.
  CssExtract,
  /// Resolves `@import` and `url()` in CSS.
  Css,
  Custom(String),
}

impl Loader {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Ts => "ts-loader",
      Self::Style => "style-loader",
      Self::CssExtract => "mini-css-extract-plugin/loader",
      Self::Css => "css-loader",
      Self::Custom(name) => name,
    }
  }
}

impl From<String> for Loader {
  fn from(value: String) -> Self {
    match value.as_str() {
      "ts-loader" => Self::Ts,
      "style-loader" => Self::Style,
      "mini-css-extract-plugin/loader" => Self::CssExtract,
      "css-loader" => Self::Css,
      _ => Self::Custom(value),
    }
  }
}

impl From<Loader> for String {
  fn from(value: Loader) -> Self {
    match value {
      Loader::Custom(name) => name,
      known => known.as_str().to_string(),
    }
  }
}

impl Display for Loader {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[test]
fn test_loader_names() {
  assert_eq!(Loader::from("css-loader".to_string()), Loader::Css);
  assert_eq!(Loader::from("sass-loader".to_string()), Loader::Custom("sass-loader".to_string()));
  assert_eq!(String::from(Loader::CssExtract), "mini-css-extract-plugin/loader");
}

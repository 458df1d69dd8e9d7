use serde::Serialize;

const NAME_PLACEHOLDER: &str = "[name]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into() }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  /// Without `[name]` every bundle would be written to the same file.
  pub fn has_name_placeholder(&self) -> bool {
    self.template.contains(NAME_PLACEHOLDER)
  }

  pub fn render(&self, name: &str) -> String {
    self.template.replace(NAME_PLACEHOLDER, name)
  }
}

impl From<String> for FilenameTemplate {
  fn from(template: String) -> Self {
    Self { template }
  }
}

impl From<&str> for FilenameTemplate {
  fn from(template: &str) -> Self {
    Self::new(template)
  }
}

#[test]
fn test_render_filename_template() {
  let template = FilenameTemplate::from("[name].min.js");
  assert!(template.has_name_placeholder());
  assert_eq!(template.render("adaptivecards-hc-editor"), "adaptivecards-hc-editor.min.js");

  let fixed = FilenameTemplate::from("bundle.js");
  assert!(!fixed.has_name_placeholder());
  assert_eq!(fixed.render("app"), "bundle.js");
}

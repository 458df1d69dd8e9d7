use std::path::{Component, Path, PathBuf};

use anyhow::anyhow;
use assetpack_common::{
  CopyRule, DescriptorOptions, DevServerConfig, EntryMap, FilePattern, FilenameTemplate,
  InputItem, LoaderRule, LoaderRuleOptions, NormalizedDescriptorOptions,
};
use assetpack_error::{BuildError, BuildResult};
use assetpack_utils::{
  ecmascript::is_valid_global_name, indexmap::FxIndexMap, path_ext::PathExt,
  sanitize_file_name::sanitize_file_name,
};
use itertools::Itertools;

pub const DEFAULT_DIR: &str = "dist";
pub const DEFAULT_ENTRY_FILENAMES: &str = "[name].js";
pub const DEFAULT_MINIFIED_ENTRY_FILENAMES: &str = "[name].min.js";
pub const DEFAULT_CSS_FILENAMES: &str = "[name].css";
pub const DEFAULT_MINIFIED_CSS_FILENAMES: &str = "[name].min.css";

/// Applies defaults and validates. Every problem found is reported, not just the first.
pub fn normalize_options(
  raw_options: DescriptorOptions,
) -> BuildResult<NormalizedDescriptorOptions> {
  let mut errors = BuildError::default();

  let cwd = raw_options.cwd.unwrap_or_default();
  let dir = Path::new(raw_options.dir.as_deref().unwrap_or(DEFAULT_DIR)).resolve_against(&cwd);

  let entry = normalize_entry(raw_options.entry.unwrap_or_default(), &mut errors);

  let entry_filenames = template_or(raw_options.entry_filenames, DEFAULT_ENTRY_FILENAMES);
  let minified_entry_filenames =
    template_or(raw_options.minified_entry_filenames, DEFAULT_MINIFIED_ENTRY_FILENAMES);
  let css_filenames = template_or(raw_options.css_filenames, DEFAULT_CSS_FILENAMES);
  let minified_css_filenames =
    template_or(raw_options.minified_css_filenames, DEFAULT_MINIFIED_CSS_FILENAMES);
  let templates = [
    ("entryFilenames", &entry_filenames),
    ("minifiedEntryFilenames", &minified_entry_filenames),
    ("cssFilenames", &css_filenames),
    ("minifiedCssFilenames", &minified_css_filenames),
  ];
  for (option, template) in templates {
    if !template.has_name_placeholder() {
      errors.push(anyhow!(
        "`{option}` template {:?} has no `[name]` placeholder",
        template.template()
      ));
    }
  }

  if let Some(library) = &raw_options.library {
    if !is_valid_global_name(library) {
      errors.push(anyhow!("`library` must be a valid global identifier, got {library:?}"));
    }
  }

  let rules = raw_options
    .rules
    .unwrap_or_default()
    .into_iter()
    .enumerate()
    .filter_map(|(idx, rule)| match normalize_rule(rule) {
      Ok(rule) => Some(rule),
      Err(err) => {
        errors.push(err.context(format!("invalid loader rule #{idx}")));
        None
      }
    })
    .collect::<Vec<_>>();

  let copy = raw_options.copy.unwrap_or_default();
  for (idx, rule) in copy.iter().enumerate() {
    if let Err(err) = check_copy_rule(rule) {
      errors.push(err.context(format!("invalid copy rule #{idx}")));
    }
  }

  check_output_collisions(&entry, &templates, &copy, &mut errors);

  errors.into_result()?;

  tracing::debug!(
    entries = entry.len(),
    rules = rules.len(),
    dir = %dir.display(),
    "normalized build descriptor"
  );

  Ok(NormalizedDescriptorOptions {
    entry,
    cwd,
    dir,
    entry_filenames,
    minified_entry_filenames,
    css_filenames,
    minified_css_filenames,
    library: raw_options.library,
    rules,
    copy,
    resolve: raw_options.resolve.unwrap_or_default(),
    dev_server_port: raw_options.dev_server_port.unwrap_or(DevServerConfig::DEFAULT_PORT),
  })
}

fn template_or(template: Option<String>, default: &str) -> FilenameTemplate {
  template.map_or_else(|| FilenameTemplate::from(default), FilenameTemplate::from)
}

fn normalize_entry(items: Vec<InputItem>, errors: &mut BuildError) -> EntryMap {
  if items.is_empty() {
    errors.push(anyhow!("descriptor declares no entry points"));
  }

  let named = items
    .into_iter()
    .filter_map(|InputItem { name, import }| {
      if import.is_empty() {
        errors.push(anyhow!("entry {:?} has an empty import path", name.unwrap_or_default()));
        return None;
      }
      let name = match name {
        Some(name) if !is_plain_bundle_name(&name) => {
          errors.push(anyhow!(
            "entry {import:?} is named {name:?}, bundle names must be plain file names"
          ));
          return None;
        }
        Some(name) => name,
        None => sanitize_file_name(&Path::new(&import).representative_file_name()),
      };
      Some((name, import))
    })
    .collect::<Vec<_>>();

  for duplicated in named.iter().map(|(name, _)| name).duplicates() {
    errors.push(anyhow!("bundle name {duplicated:?} is used by more than one entry"));
  }

  named.into_iter().collect()
}

/// Names are substituted into `[name]`, so they must not add or climb directories.
fn is_plain_bundle_name(name: &str) -> bool {
  !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

fn check_copy_rule(rule: &CopyRule) -> anyhow::Result<()> {
  if rule.from.file_name().is_none() {
    return Err(anyhow!("`from` {:?} does not name a file", rule.from));
  }
  if rule.to.is_absolute() || rule.to.has_root() || has_parent_dir(&rule.to) {
    return Err(anyhow!("`to` {:?} must be relative to the output directory", rule.to));
  }
  let destination = rule.destination(Path::new(""));
  if has_parent_dir(&destination) {
    return Err(anyhow!("{:?} would be copied outside the output directory", rule.from));
  }
  Ok(())
}

fn has_parent_dir(path: &Path) -> bool {
  path.components().any(|component| matches!(component, Component::ParentDir))
}

/// Dev and production builds share one output directory, so no two artifacts may land on the same
/// file. Paths are compared after normalization, `./[name].js` and `[name].js` collide.
fn check_output_collisions(
  entry: &EntryMap,
  templates: &[(&str, &FilenameTemplate)],
  copy: &[CopyRule],
  errors: &mut BuildError,
) {
  // A template without `[name]` is reported on its own.
  let named_templates =
    templates.iter().filter(|(_, template)| template.has_name_placeholder()).collect::<Vec<_>>();
  let rendered = entry.keys().flat_map(|name| {
    named_templates.iter().map(move |(option, template)| {
      let path = Path::new(&template.render(name)).resolve_against(Path::new(""));
      (path, format!("`{option}` for {name:?}"))
    })
  });
  let copied = copy
    .iter()
    .enumerate()
    .map(|(idx, rule)| (rule.destination(Path::new("")), format!("copy rule #{idx}")));

  let mut owners: FxIndexMap<PathBuf, String> = FxIndexMap::default();
  for (path, owner) in rendered.chain(copied) {
    match owners.get(&path) {
      Some(first) => errors.push(anyhow!("{first} and {owner} both write {}", path.display())),
      None => {
        owners.insert(path, owner);
      }
    }
  }
}

fn normalize_rule(rule: LoaderRuleOptions) -> anyhow::Result<LoaderRule> {
  let LoaderRuleOptions { test, loaders, exclude } = rule;
  if loaders.is_empty() {
    return Err(anyhow!("rule for {test:?} has no loaders"));
  }
  let mut rule = LoaderRule::new(compile_pattern("test", &test)?, loaders);
  if let Some(exclude) = exclude {
    rule = rule.with_exclude(compile_pattern("exclude", &exclude)?);
  }
  Ok(rule)
}

fn compile_pattern(field: &str, pattern: &str) -> anyhow::Result<FilePattern> {
  FilePattern::new(pattern)
    .map_err(|err| anyhow!("`{field}` {pattern:?} is not a valid regex: {err}"))
}

#[cfg(test)]
mod tests {
  use assetpack_common::{CopyRule, Loader};

  use super::*;

  fn minimal() -> DescriptorOptions {
    DescriptorOptions { entry: Some(vec!["./src/app.ts".into()]), ..Default::default() }
  }

  #[test]
  fn fills_defaults() {
    let options = normalize_options(minimal()).unwrap();

    assert_eq!(options.entry.get("app").map(String::as_str), Some("./src/app.ts"));
    assert_eq!(options.dir, Path::new("dist"));
    assert_eq!(options.entry_filenames.template(), "[name].js");
    assert_eq!(options.minified_entry_filenames.template(), "[name].min.js");
    assert_eq!(options.css_filenames.template(), "[name].css");
    assert_eq!(options.resolve.extensions, [".ts", ".tsx", ".js"]);
    assert_eq!(options.dev_server_port, 8080);
    assert!(options.library.is_none());
    assert!(options.rules.is_empty());
    assert!(options.copy.is_empty());
  }

  #[test]
  fn resolves_output_dir_against_cwd() {
    let options = normalize_options(DescriptorOptions {
      cwd: Some("/work/hc-editor".into()),
      dir: Some("./dist".to_string()),
      ..minimal()
    })
    .unwrap();
    assert_eq!(options.dir, Path::new("/work/hc-editor/dist"));
  }

  #[test]
  fn derives_names_for_unnamed_entries() {
    let options = normalize_options(DescriptorOptions {
      entry: Some(vec![
        "./src/editor/index.ts".into(),
        "./src/card preview.ts".into(),
        InputItem::named("adaptivecards-hc-editor", "./src/app.ts"),
      ]),
      ..Default::default()
    })
    .unwrap();

    let names = options.entry.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, ["editor", "card_preview", "adaptivecards-hc-editor"]);
  }

  #[test]
  fn compiles_loader_rules() {
    let options = normalize_options(DescriptorOptions {
      rules: Some(vec![LoaderRuleOptions {
        test: r"\.ts$".to_string(),
        loaders: vec![Loader::Ts],
        exclude: Some("node_modules".to_string()),
      }]),
      copy: Some(vec![CopyRule::flattened("../shared/base.css")]),
      ..minimal()
    })
    .unwrap();

    assert!(options.rules[0].applies_to(Path::new("src/app.ts")));
    assert!(!options.rules[0].applies_to(Path::new("node_modules/x/index.ts")));
    assert_eq!(options.copy.len(), 1);
  }

  #[test]
  fn rejects_invalid_exclude_pattern() {
    let errors = normalize_options(DescriptorOptions {
      rules: Some(vec![LoaderRuleOptions {
        test: r"\.ts$".to_string(),
        loaders: vec![Loader::Ts],
        exclude: Some("(node_modules".to_string()),
      }]),
      ..minimal()
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    let message = format!("{:#}", errors[0]);
    assert!(message.starts_with("invalid loader rule #0"), "{message}");
    assert!(message.contains("`exclude`"), "{message}");
  }

  #[test]
  fn rejects_templates_that_only_differ_by_relative_prefix() {
    let errors = normalize_options(DescriptorOptions {
      minified_entry_filenames: Some("./[name].js".to_string()),
      ..minimal()
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
      errors[0].to_string(),
      r#"`entryFilenames` for "app" and `minifiedEntryFilenames` for "app" both write app.js"#
    );
  }

  #[test]
  fn rejects_css_template_that_shadows_a_script() {
    let errors = normalize_options(DescriptorOptions {
      css_filenames: Some("[name].js".to_string()),
      ..minimal()
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("`cssFilenames` for \"app\""), "{}", errors[0]);
  }

  #[test]
  fn accepts_distinct_templates_in_subdirectories() {
    let options = normalize_options(DescriptorOptions {
      entry_filenames: Some("./js/[name].js".to_string()),
      minified_entry_filenames: Some("js/min/[name].js".to_string()),
      ..minimal()
    })
    .unwrap();
    assert_eq!(options.entry_filenames.template(), "./js/[name].js");
  }

  #[test]
  fn rejects_names_that_are_not_plain_file_names() {
    let errors = normalize_options(DescriptorOptions {
      entry: Some(vec![
        InputItem::named("", "./src/app.ts"),
        InputItem::named("../../etc/x", "./src/x.ts"),
        InputItem::named("nested/editor", "./src/editor.ts"),
        InputItem::named("..", "./src/up.ts"),
        InputItem::named("designer", "./src/designer.ts"),
      ]),
      ..Default::default()
    })
    .unwrap_err();

    let messages = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(messages.len(), 4, "{messages:#?}");
    assert!(messages.iter().all(|m| m.contains("must be plain file names")));
    assert!(messages.iter().any(|m| m.contains(r#""../../etc/x""#)));
  }

  #[test]
  fn rejects_copy_rules_outside_the_output_dir() {
    let errors = normalize_options(DescriptorOptions {
      copy: Some(vec![
        CopyRule::flattened(""),
        CopyRule { from: "./assets/logo.svg".into(), to: "/etc".into(), flatten: true },
        CopyRule { from: "./assets/logo.svg".into(), to: "../public".into(), flatten: true },
        CopyRule { from: "assets/../../secret.txt".into(), to: ".".into(), flatten: false },
      ]),
      ..minimal()
    })
    .unwrap_err();

    let messages = errors.iter().map(|err| format!("{err:#}")).collect::<Vec<_>>();
    assert_eq!(messages.len(), 4, "{messages:#?}");
    assert!(messages[0].starts_with("invalid copy rule #0") && messages[0].contains("name a file"));
    assert!(messages[1].starts_with("invalid copy rule #1") && messages[1].contains("relative"));
    assert!(messages[2].starts_with("invalid copy rule #2") && messages[2].contains("relative"));
    assert!(messages[3].starts_with("invalid copy rule #3") && messages[3].contains("outside"));
  }

  #[test]
  fn rejects_copies_landing_on_the_same_file() {
    let errors = normalize_options(DescriptorOptions {
      copy: Some(vec![
        CopyRule::flattened("../shared/base.css"),
        CopyRule::flattened("./theme/base.css"),
      ]),
      ..minimal()
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "copy rule #0 and copy rule #1 both write base.css");
  }

  #[test]
  fn rejects_copy_that_overwrites_a_bundle() {
    let errors = normalize_options(DescriptorOptions {
      copy: Some(vec![CopyRule::flattened("./static/app.js")]),
      ..minimal()
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
      errors[0].to_string(),
      r#"`entryFilenames` for "app" and copy rule #0 both write app.js"#
    );
  }

  #[test]
  fn collects_every_error() {
    let errors = normalize_options(DescriptorOptions {
      entry: Some(vec!["./a/app.ts".into(), "./b/app.ts".into(), InputItem::named("empty", "")]),
      entry_filenames: Some("bundle.js".to_string()),
      minified_css_filenames: Some("[name].css".to_string()),
      library: Some("hc-editor".to_string()),
      rules: Some(vec![LoaderRuleOptions {
        test: "(".to_string(),
        loaders: vec![Loader::Css],
        exclude: None,
      }]),
      ..Default::default()
    })
    .unwrap_err();

    let messages = errors.iter().map(|err| format!("{err:#}")).collect::<Vec<_>>();
    assert_eq!(messages.len(), 6, "{messages:#?}");
    assert!(messages.iter().any(|m| m.contains("empty import path")));
    assert!(messages.iter().any(|m| m.contains(r#""app" is used by more than one entry"#)));
    assert!(messages.iter().any(|m| m.contains("no `[name]` placeholder")));
    assert!(messages.iter().any(|m| m.contains("`minifiedCssFilenames` for \"app\"")));
    assert!(messages.iter().any(|m| m.contains("valid global identifier")));
    assert!(messages.iter().any(|m| m.starts_with("invalid loader rule #0")));
  }

  #[test]
  fn rejects_descriptor_without_entries() {
    let errors = normalize_options(DescriptorOptions::default()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("no entry points"));
  }
}

mod build_mode;
mod descriptor_options;
mod resolved_config;

pub use crate::{
  build_mode::BuildMode,
  descriptor_options::{
    copy_rule::CopyRule,
    dev_server::DevServerConfig,
    filename_template::FilenameTemplate,
    input_item::InputItem,
    loader::Loader,
    loader_rule::{FilePattern, LoaderRule, LoaderRuleOptions},
    normalized_descriptor_options::NormalizedDescriptorOptions,
    resolve_options::ResolveOptions,
    source_map_policy::SourceMapPolicy,
    DescriptorOptions,
  },
  resolved_config::{
    output_rule::OutputRule,
    planned_artifact::{ArtifactKind, PlannedArtifact},
    plugin::Plugin,
    EntryMap, ResolvedConfig,
  },
};

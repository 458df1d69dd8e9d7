pub mod load_options;
pub mod normalize_options;

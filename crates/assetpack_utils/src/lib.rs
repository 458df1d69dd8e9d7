pub mod ecmascript;
pub mod indexmap;
pub mod path_ext;
pub mod sanitize_file_name;

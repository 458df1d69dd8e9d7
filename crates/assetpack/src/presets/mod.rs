pub mod card_editor;

pub use card_editor::card_editor;

pub mod card;
pub mod gallery;
pub mod help;
pub mod root;

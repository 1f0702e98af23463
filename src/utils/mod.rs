pub mod text;

pub use text::{collapse_spaces, is_collapsed};

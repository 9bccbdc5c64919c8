pub mod category;
pub mod project;

pub use category::{Category, ParseCategoryError};
pub use project::{FieldTags, ProjectRecord, RawField};

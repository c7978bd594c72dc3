pub mod json;
pub mod pagination;
pub mod parse;
pub mod validate;

pub mod analyzer;
pub mod cover_letter;
pub mod errors;
pub mod handlers;
pub mod rewrite;
pub mod skills_gap;

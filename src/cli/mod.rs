//! CLI command handlers

pub mod input;
pub mod items;
pub mod reset;
pub mod score;
pub mod summary;

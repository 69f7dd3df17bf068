// file: src/repository/mod.rs
// description: issue dataset access module exports
// reference: internal module structure

pub mod loader;

pub use loader::IssueLoader;

// src/resume/mod.rs
//! Resume documents: lazy content initialization, builder edits, storage

pub mod builder;
pub mod initializer;
pub mod repository;

pub use builder::PersonalField;
pub use initializer::{ensure_content, materialize};
pub use repository::ResumeRepository;

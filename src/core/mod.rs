// src/core/mod.rs
pub mod category;
pub mod classifier;
pub mod engine;
pub mod frequency;
pub mod segmenter;
pub mod types;

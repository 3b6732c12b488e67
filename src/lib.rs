// src/lib.rs

pub mod core;
pub mod error;
pub mod fallback;

pub use crate::core::engine::RecognitionEngine;
pub use crate::core::types::{RecognitionRequest, RecognitionResult};

//! Error types for the HLS resolver service

pub mod types;

pub use types::AppError;

pub mod config;
pub mod errors;
pub mod hls;
pub mod models;
pub mod upstream;
pub mod utils;
pub mod web;

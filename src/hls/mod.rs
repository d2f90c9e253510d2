//! HLS master playlist handling
//!
//! This module contains the core of the service: the master-playlist
//! parser that turns raw playlist text into an ordered quality map, and
//! the resolver that locates a master playlist URL inside provider
//! metadata. Both are pure, single-pass functions over in-memory data;
//! all network access lives in [`crate::upstream`].

pub mod parser;
pub mod resolver;

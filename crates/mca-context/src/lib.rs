//! # mca-context
//!
//! Splits a transcript into the parts that talk about high-stakes work and
//! the parts that talk about everyday, low-stakes work, so each can be
//! coded separately.

pub mod filter;
pub mod indicators;

pub use filter::ContextFilter;

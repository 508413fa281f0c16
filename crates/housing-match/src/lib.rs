//! Compatibility scoring and ranking engine for matching residents to housing options.
//!
//! The [`matching`] module holds the pure engine (normalizer, scorer, ranker, and the
//! presentation rules applied to its output). The remaining modules carry the ambient
//! concerns shared by the HTTP service and CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;

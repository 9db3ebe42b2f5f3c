//! Lokal - source-to-source i18n transform engine for React/Next.js
//!
//! Lokal extracts human-readable text from TSX/JSX component files and
//! rewrites the tree so every displayed string is routed through a runtime
//! translation lookup keyed by a stable hash. It is a compile-time
//! transform, not a runtime translation engine: parsing, printing, metadata
//! persistence and the translation service itself are the caller's
//! collaborators.
//!
//! ## Module Structure
//!
//! - `config`: Configuration file loading and parsing
//! - `entry`: Translation entry types handed to the metadata store
//! - `hash`: Stable translation key generation
//! - `parsers`: JSX/TSX parsing helpers consumed by the engine and tests
//! - `pipeline`: Parallel batch processing over in-memory sources
//! - `richtext`: Placeholder-string escaping and the runtime decoder
//! - `transform`: The tree-rewriting engine itself
//! - `utils`: Shared utility functions

pub mod config;
pub mod entry;
pub mod hash;
pub mod parsers;
pub mod pipeline;
pub mod richtext;
pub mod transform;
pub mod utils;

//! `docsync_core` keeps two pieces of documentation in step with a crate's
//! example programs: the examples section of a readme, and the `//!` header
//! comment at the top of the crate's entry file.
//!
//! ## Processing Pipeline
//!
//! ```text
//! examples/*.rs
//!   → Collector (priority list first, then the directory scan, no duplicates)
//!   → Renderer (body of each entry point, dedented, inside a fenced block)
//!   → Section updater (replaces the readme's examples section)
//!   → Excerpt extractor (prose span of the updated readme, as `//!` lines)
//!   → Header updater (replaces the entry file's `//!` header)
//! ```
//!
//! Every stage is driven by markers found in the current text. Missing
//! markers turn a stage into a no-op, so running the pipeline twice yields the
//! same bytes.
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `docsync.toml`.
//! - [`collector`] — Example discovery and ordering.
//! - [`renderer`] — Turning one example into a fenced block.
//! - [`section`] — Anchored section replacement.
//! - [`excerpt`] — Lifting prose out of the readme.
//! - [`header`] — Comment header replacement.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsync_core::SyncContext;
//! use docsync_core::compute_sync;
//! use docsync_core::write_updates;
//! use std::path::Path;
//!
//! let ctx = SyncContext::load(Path::new(".")).unwrap();
//! let result = compute_sync(&ctx).unwrap();
//! write_updates(&result).unwrap();
//! ```

pub use document::*;
pub use engine::*;
pub use error::*;

pub mod collector;
pub mod config;
mod document;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod excerpt;
pub mod header;
pub mod renderer;
pub mod section;

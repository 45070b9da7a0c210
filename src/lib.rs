//! # stampack
//!
//! Normalizes file modification timestamps inside an archive so that
//! otherwise-identical build artifacts compare equal despite per-file
//! timestamp jitter.
//!
//! The crate is a single sequential pipeline: the archive is extracted into
//! a unique scratch workspace, the newest modification time among files
//! matching a substring filter is computed, every matched file is stamped
//! with it, and the workspace is repackaged and swapped into the original
//! archive's place.
//!
//! ## Key Modules
//!
//! - [`codec`]: Archive format inference and decode/encode via external tools.
//! - [`walk`]: Recursive directory traversal with substring matching.
//! - [`normalize`]: Reference-time computation and timestamp stamping.
//! - [`workspace`]: Scratch directory lifecycle.
//! - [`pipeline`]: The end-to-end extract → normalize → repack → swap run.

pub mod cli;
pub mod codec;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod walk;
pub mod workspace;

pub use error::StampackError;

// Narrow wrapper around external subprocess invocation.
pub(crate) mod exec;

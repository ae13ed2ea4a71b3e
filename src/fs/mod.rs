//! Filesystem utilities for proposal-gen.
//!
//! Generated files are always replaced in a single atomic step so a crash never
//! leaves a half-written proposal next to its template.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;

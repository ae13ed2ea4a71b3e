//! Exit code constants for the proposal-gen CLI.
//!
//! - 0: Success
//! - 1: User error (bad config, invalid proposal content)
//! - 2: Generation failure (at least one template or the README failed)
//! - 3: Write failure (the document could not be saved)
//! - 4: Dependency missing (binary built without document support)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration, content file, or document structure.
pub const USER_ERROR: i32 = 1;

/// One or more templates in a batch could not be generated.
pub const GENERATION_FAILURE: i32 = 2;

/// An output file could not be written.
pub const WRITE_FAILURE: i32 = 3;

/// The document-authoring capability is not available in this build.
pub const DEPENDENCY_MISSING: i32 = 4;

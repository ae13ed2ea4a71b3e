//! Base directory and path resolution for proposal-gen.
//!
//! Every relative path in the configuration (template sources, README,
//! document output, content file) is resolved against one base directory:
//! the current working directory, or the directory given with `--dir`.

use crate::error::{ProposalError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Config file name looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "proposals.yaml";

/// Directory (under the base directory) that holds run state.
pub const STATE_DIR_NAME: &str = ".proposals";

/// Resolved paths for one proposal-gen invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProposalContext {
    /// Directory every relative configured path is resolved against.
    pub base_dir: PathBuf,

    /// Directory holding run state such as the event log.
    pub state_dir: PathBuf,
}

impl ProposalContext {
    /// Resolve the context from `dir`, or the current working directory.
    pub fn resolve(dir: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ProposalError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        match dir {
            Some(dir) if dir.is_absolute() => Self::resolve_from(dir),
            Some(dir) => Self::resolve_from(cwd.join(dir)),
            None => Self::resolve_from(cwd),
        }
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();

        if !base_dir.is_dir() {
            return Err(ProposalError::UserError(format!(
                "base directory '{}' does not exist or is not a directory",
                base_dir.display()
            )));
        }

        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            state_dir: base_dir.join(STATE_DIR_NAME),
        })
    }

    /// Path to the optional `proposals.yaml`.
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// Directory holding the NDJSON event log.
    pub fn events_dir(&self) -> PathBuf {
        self.state_dir.clone()
    }

    /// Resolve a configured path against the base directory.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve_path(&self, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn resolve_from_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ProposalContext::resolve_from(temp_dir.path()).unwrap();

        assert_eq!(ctx.base_dir, temp_dir.path());
        assert_eq!(ctx.config_path(), temp_dir.path().join("proposals.yaml"));
        assert_eq!(ctx.events_dir(), temp_dir.path().join(".proposals"));
    }

    #[test]
    fn resolve_from_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = ProposalContext::resolve_from(temp_dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn relative_paths_join_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ProposalContext::resolve_from(temp_dir.path()).unwrap();

        assert_eq!(
            ctx.resolve_path("demo/formal-proposal.html"),
            temp_dir.path().join("demo").join("formal-proposal.html")
        );

        let absolute = temp_dir.path().join("elsewhere.docx");
        assert_eq!(ctx.resolve_path(absolute.to_str().unwrap()), absolute);
    }

    #[test]
    #[serial]
    fn resolve_defaults_to_current_directory() {
        let temp_dir = TempDir::new().unwrap();
        let canonical = temp_dir.path().canonicalize().unwrap();
        let _guard = DirGuard::new(&canonical);

        let ctx = ProposalContext::resolve(None).unwrap();
        assert_eq!(ctx.base_dir.canonicalize().unwrap(), canonical);
    }

    #[test]
    #[serial]
    fn resolve_relative_dir_against_current_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("sales")).unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let ctx = ProposalContext::resolve(Some(Path::new("sales"))).unwrap();
        assert!(ctx.base_dir.ends_with("sales"));
    }
}

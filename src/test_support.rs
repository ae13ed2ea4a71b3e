use crate::config::{Placeholders, TemplateSpec};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A template spec using the January/February 2025 tokens.
pub(crate) fn template_spec(name: &str, source: &str) -> TemplateSpec {
    TemplateSpec {
        name: name.to_string(),
        label: format!("{} proposal", name),
        source: source.to_string(),
        placeholders: Placeholders::new("January 2025", "February 2025"),
        purpose: format!("Purpose of {}", name),
        highlights: vec!["First highlight".to_string()],
        best_for: "Tests".to_string(),
        recommended: false,
    }
}

/// Write `content` to `base/relative`, creating directories.
pub(crate) fn write_template(base: &Path, relative: &str, content: &str) -> PathBuf {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

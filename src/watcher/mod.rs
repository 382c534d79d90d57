//! Rebuild-on-change file watching shared by `generate --watch` and the
//! dev server

use anyhow::Result;
use notify::{RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::ArtistPage;

const DEBOUNCE: Duration = Duration::from_millis(500);

/// What to watch for one site layout.
///
/// The base directory is watched instead of `_config.yml` itself so that
/// editors that save by renaming still trigger a rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTargets {
    config: PathBuf,
    source_dir: PathBuf,
    public_dir: PathBuf,
    dirs: Vec<PathBuf>,
}

impl WatchTargets {
    pub fn new(site: &ArtistPage) -> Self {
        let source_dir = site
            .source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| site.base_dir.clone());

        let mut dirs = vec![site.base_dir.clone()];
        if source_dir != site.base_dir {
            dirs.push(source_dir.clone());
        }

        Self {
            config: site.base_dir.join(crate::CONFIG_FILE),
            source_dir,
            public_dir: site.public_dir.clone(),
            dirs,
        }
    }

    /// Directories to register, each non-recursively
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Whether a change at `path` should trigger a rebuild
    pub fn is_relevant(&self, path: &Path) -> bool {
        if path.starts_with(&self.public_dir) || is_editor_artifact(path) {
            return false;
        }
        path == self.config || path.parent() == Some(self.source_dir.as_path())
    }
}

/// Swap, backup and finder files editors leave next to the document
fn is_editor_artifact(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name == ".DS_Store" || name.ends_with('~') || name.ends_with(".swp")
}

/// Watch the site and call `on_change` with a freshly loaded site after
/// every relevant change. The config is re-read each time, so a new
/// `source` or `public_dir` moves the watch with it.
///
/// Runs until the watcher shuts down.
pub async fn watch<F>(site: &ArtistPage, mut on_change: F) -> Result<()>
where
    F: FnMut(&ArtistPage) -> Result<()> + Send,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debouncer = new_debouncer(DEBOUNCE, move |result: DebounceEventResult| {
        let _ = tx.send(result);
    })?;

    let mut targets = WatchTargets::new(site);
    register(debouncer.watcher(), None, &targets);

    while let Some(result) = rx.recv().await {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
        };

        let changed: Vec<_> = events
            .iter()
            .filter(|e| targets.is_relevant(&e.path))
            .collect();
        if changed.is_empty() {
            continue;
        }
        for event in &changed {
            tracing::info!("File changed: {}", event.path.display());
        }

        let site = match ArtistPage::new(&site.base_dir) {
            Ok(site) => site,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", crate::CONFIG_FILE, e);
                continue;
            }
        };

        let next = WatchTargets::new(&site);
        if next != targets {
            register(debouncer.watcher(), Some(&targets), &next);
            targets = next;
        }

        if let Err(e) = on_change(&site) {
            tracing::error!("Generation failed: {}", e);
        }
    }

    Ok(())
}

/// Move the watch from `previous` (if any) to `next`
fn register<W: Watcher + ?Sized>(
    watcher: &mut W,
    previous: Option<&WatchTargets>,
    next: &WatchTargets,
) {
    if let Some(previous) = previous {
        for dir in previous.dirs() {
            let _ = watcher.unwatch(dir);
        }
    }

    for dir in next.dirs() {
        if !dir.exists() {
            tracing::debug!("Not watching missing {:?}", dir);
            continue;
        }
        match watcher.watch(dir, RecursiveMode::NonRecursive) {
            Ok(()) => tracing::debug!("Watching: {:?}", dir),
            Err(e) => tracing::warn!("Cannot watch {:?}: {}", dir, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_targets_for_default_layout() {
        let dir = TempDir::new().unwrap();
        let site = ArtistPage::new(dir.path()).unwrap();
        let targets = WatchTargets::new(&site);

        assert_eq!(
            targets.dirs(),
            &[dir.path().to_path_buf(), dir.path().join("content")]
        );
        assert!(targets.is_relevant(&dir.path().join(crate::CONFIG_FILE)));
        assert!(targets.is_relevant(&dir.path().join("content/artist.md")));
        assert!(!targets.is_relevant(&dir.path().join("content/.artist.md.swp")));
        assert!(!targets.is_relevant(&dir.path().join("content/artist.md~")));
        assert!(!targets.is_relevant(&dir.path().join("README.md")));
    }

    #[test]
    fn test_output_never_triggers_rebuild() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(crate::CONFIG_FILE),
            "source: artist.md\npublic_dir: public\n",
        )
        .unwrap();
        let site = ArtistPage::new(dir.path()).unwrap();
        let targets = WatchTargets::new(&site);

        assert_eq!(targets.dirs(), &[dir.path().to_path_buf()]);
        assert!(targets.is_relevant(&dir.path().join("artist.md")));
        assert!(!targets.is_relevant(&dir.path().join("public")));
        assert!(!targets.is_relevant(&dir.path().join("public/model.json")));
    }

    #[test]
    fn test_targets_follow_source_change() {
        let dir = TempDir::new().unwrap();
        let before = WatchTargets::new(&ArtistPage::new(dir.path()).unwrap());

        fs::write(dir.path().join(crate::CONFIG_FILE), "source: bio/nova.md\n").unwrap();
        let after = WatchTargets::new(&ArtistPage::new(dir.path()).unwrap());

        assert_ne!(before, after);
        assert!(after.is_relevant(&dir.path().join("bio/nova.md")));
        assert!(!after.is_relevant(&dir.path().join("content/artist.md")));
    }
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use ignore::WalkBuilder;
use pathpick_match::Scanner;

/// Limits applied while enumerating candidates.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Stop enumerating once this many files have been collected.
    pub max_files: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { max_files: 10_000 }
    }
}

/// Enumerates regular files under a root directory.
///
/// Hidden files and anything matched by `.gitignore` (local, global, or
/// exclude files) are skipped. Paths are reported relative to the root and
/// sorted, so the unranked "browse" listing is alphabetical.
///
/// Snapshots are cached per root: repeated `paths()` calls are free until
/// `flush()`, and re-targeting via `set_root` keeps previously scanned roots
/// warm.
pub struct FileScanner {
    root: PathBuf,
    options: ScanOptions,
    cache: Mutex<HashMap<PathBuf, Arc<[String]>>>,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    pub fn with_options(root: impl AsRef<Path>, options: ScanOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Point the scanner at a different root. Snapshots for other roots stay
    /// cached, so hopping back to an earlier root does not rescan.
    pub fn set_root(&mut self, root: impl AsRef<Path>) {
        self.root = root.as_ref().to_path_buf();
    }

    /// Drop every cached snapshot; the next `paths()` call rescans.
    pub fn flush(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<[String]>>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn scan(&self) -> Arc<[String]> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            // Pickers get pointed at plain directories too; honor .gitignore
            // files even without a .git checkout around them.
            .require_git(false);

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Failed to read entry: {e}");
                    continue;
                }
            };
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }

            if files.len() >= self.options.max_files {
                log::warn!(
                    "Stopping scan of {} at {} files",
                    self.root.display(),
                    self.options.max_files
                );
                break;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            files.push(relative.to_string_lossy().into_owned());
        }

        files.sort_unstable();
        log::info!("Found {} files under {}", files.len(), self.root.display());
        files.into()
    }
}

impl Scanner for FileScanner {
    fn paths(&self) -> Arc<[String]> {
        if let Some(snapshot) = self.lock_cache().get(&self.root) {
            return Arc::clone(snapshot);
        }
        // Scan outside the lock; a concurrent caller at worst scans too and
        // the last insert wins with an equivalent snapshot.
        let snapshot = self.scan();
        self.lock_cache()
            .insert(self.root.clone(), Arc::clone(&snapshot));
        snapshot
    }
}

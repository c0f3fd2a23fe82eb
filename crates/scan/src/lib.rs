//! Filesystem candidate enumeration for the matcher: walks a root directory
//! for regular files (`.gitignore`-aware) and serves the result as cached,
//! root-relative snapshots.

mod file_scanner;

pub use file_scanner::{FileScanner, ScanOptions};

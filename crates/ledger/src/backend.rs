use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Where the serialized ledger document lives.
///
/// The ledger always reads and writes the whole document; backends only move
/// bytes.
pub trait LedgerBackend: Send + Sync {
    /// Current document, or `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<u8>>, LedgerError>;
    /// Replace the stored document. Either the new bytes are fully stored or
    /// the previous document is left as it was.
    fn store(&self, bytes: &[u8]) -> Result<(), LedgerError>;
    /// Short human-readable location for logs.
    fn describe(&self) -> String;
}

impl<B: LedgerBackend + ?Sized> LedgerBackend for Box<B> {
    fn load(&self) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).load()
    }
    fn store(&self, bytes: &[u8]) -> Result<(), LedgerError> {
        (**self).store(bytes)
    }
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<B: LedgerBackend + ?Sized> LedgerBackend for Arc<B> {
    fn load(&self) -> Result<Option<Vec<u8>>, LedgerError> {
        (**self).load()
    }
    fn store(&self, bytes: &[u8]) -> Result<(), LedgerError> {
        (**self).store(bytes)
    }
    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Configuration for selecting and building a backend.
///
/// # Example
/// ```
/// use ledger::BackendConfig;
///
/// // In-memory (for testing)
/// let config = BackendConfig::in_memory();
///
/// // Single JSON file, replaced atomically on every write
/// let config = BackendConfig::file("data/credential_ledger.json");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackendConfig {
    /// One pretty-printed JSON document at `path`.
    File { path: PathBuf },
    /// Process-local storage. Useful for tests; nothing survives the process.
    InMemory,
}

impl BackendConfig {
    pub fn in_memory() -> Self {
        BackendConfig::InMemory
    }

    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        BackendConfig::File { path: path.into() }
    }

    /// Build the backend based on the configuration.
    pub fn build(&self) -> Result<Box<dyn LedgerBackend>, LedgerError> {
        match self {
            BackendConfig::InMemory => Ok(Box::new(InMemoryBackend::new())),
            BackendConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(LedgerError::InvalidConfig(
                        "file backend path must not be empty".into(),
                    ));
                }
                Ok(Box::new(FileBackend::new(path.clone())))
            }
        }
    }
}

/// Ledger stored as one file, replaced via write-to-temp plus rename.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerBackend for FileBackend {
    fn load(&self) -> Result<Option<Vec<u8>>, LedgerError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, bytes: &[u8]) -> Result<(), LedgerError> {
        write_atomic(&self.path, bytes)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write `bytes` next to `path`, flush them, then rename over it.
///
/// A crash or error before the rename leaves the old file untouched. The
/// temp name carries the process id so a stale leftover never blocks writes.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path)?;
    let result = write_synced(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
        return result;
    }

    #[cfg(unix)]
    File::open(parent.unwrap_or_else(|| Path::new(".")))?.sync_all()?;

    Ok(())
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let mut tmp_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?
        .to_os_string();
    tmp_name.push(format!(".tmp-{}", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// An in-memory backend holding the last stored document.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    document: RwLock<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-serialized document.
    pub fn with_document(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            document: RwLock::new(Some(bytes.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `store` fail, leaving the document untouched.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Copy of the stored document.
    pub fn document(&self) -> Option<Vec<u8>> {
        self.document
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

impl LedgerBackend for InMemoryBackend {
    fn load(&self) -> Result<Option<Vec<u8>>, LedgerError> {
        let guard = self
            .document
            .read()
            .map_err(|_| LedgerError::backend("poisoned lock"))?;
        Ok(guard.clone())
    }

    fn store(&self, bytes: &[u8]) -> Result<(), LedgerError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LedgerError::backend("in-memory backend set to fail writes"));
        }
        *self
            .document
            .write()
            .map_err(|_| LedgerError::backend("poisoned lock"))? = Some(bytes.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_backend_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("ledger.json"));
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn file_backend_store_creates_parents_and_replaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("ledger.json");
        let backend = FileBackend::new(&path);

        backend.store(b"first").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some(&b"first"[..]));

        backend.store(b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn file_backend_store_leaves_only_complete_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let backend = FileBackend::new(&path);
        let document = vec![b'x'; 64 * 1024];

        backend.store(&document).unwrap();

        assert_eq!(fs::read(&path).unwrap(), document);
        assert!(!temp_path(&path).unwrap().exists());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("ledger.json")]);
    }

    #[test]
    fn file_backend_failed_write_keeps_previous_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let backend = FileBackend::new(&path);
        backend.store(b"original").unwrap();

        // A directory squatting on this process's temp name makes the temp write fail.
        fs::create_dir(temp_path(&path).unwrap()).unwrap();
        assert!(backend.store(b"replacement").is_err());
        assert_eq!(fs::read(&path).unwrap(), b"original");
    }

    #[test]
    fn stale_temp_file_from_another_writer_does_not_block_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::create_dir(dir.path().join("ledger.json.tmp")).unwrap();
        fs::write(dir.path().join("ledger.json.tmp-0"), b"partial").unwrap();

        let backend = FileBackend::new(&path);
        backend.store(b"fresh").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"fresh");
    }

    #[test]
    fn file_backend_read_error_is_reported() {
        let dir = tempdir().unwrap();
        // Reading a directory as a file fails with something other than NotFound.
        let backend = FileBackend::new(dir.path());
        assert!(matches!(backend.load(), Err(LedgerError::Io(_))));
    }

    #[test]
    fn in_memory_backend_round_trip_and_failure_switch() {
        let backend = InMemoryBackend::new();
        assert!(backend.load().unwrap().is_none());

        backend.store(b"doc").unwrap();
        assert_eq!(backend.document().as_deref(), Some(&b"doc"[..]));

        backend.set_fail_writes(true);
        assert!(matches!(backend.store(b"new"), Err(LedgerError::Backend(_))));
        assert_eq!(backend.load().unwrap().as_deref(), Some(&b"doc"[..]));
    }

    #[test]
    fn shared_backend_delegates() {
        let shared = Arc::new(InMemoryBackend::with_document("seed"));
        let handle: Box<dyn LedgerBackend> = Box::new(Arc::clone(&shared));
        assert_eq!(handle.load().unwrap().as_deref(), Some(&b"seed"[..]));
        handle.store(b"next").unwrap();
        assert_eq!(shared.document().as_deref(), Some(&b"next"[..]));
        assert_eq!(handle.describe(), "in-memory");
    }

    #[test]
    fn backend_config_builds_and_validates() {
        assert_eq!(BackendConfig::in_memory().build().unwrap().describe(), "in-memory");
        let cfg = BackendConfig::file("some/where/ledger.json");
        assert!(cfg.build().unwrap().describe().ends_with("ledger.json"));
        assert!(matches!(
            BackendConfig::file("").build(),
            Err(LedgerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn backend_config_serde_shape() {
        let cfg: BackendConfig =
            serde_json::from_str(r#"{"type":"file","path":"data/ledger.json"}"#).unwrap();
        assert_eq!(cfg, BackendConfig::file("data/ledger.json"));
        let mem: BackendConfig = serde_json::from_str(r#"{"type":"in_memory"}"#).unwrap();
        assert_eq!(mem, BackendConfig::InMemory);
    }
}

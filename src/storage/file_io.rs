//! File I/O utilities with atomic writes
//!
//! Settings and session files are small JSON documents; they are either
//! completely written or not modified at all.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AdminError;

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, AdminError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    Ok(read_json_optional(path)?.unwrap_or_default())
}

/// Read JSON from a file, returning `None` if the file doesn't exist
pub fn read_json_optional<T, P>(path: P) -> Result<Option<T>, AdminError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| AdminError::Storage(format!("No se pudo abrir {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| AdminError::Storage(format!("No se pudo leer {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, fsync, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), AdminError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), data, false)
}

/// Same as [`write_json_atomic`] but owner-only permissions on Unix
pub fn write_json_private<T, P>(path: P, data: &T) -> Result<(), AdminError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), data, true)
}

fn write_atomic<T: Serialize>(path: &Path, data: &T, private: bool) -> Result<(), AdminError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AdminError::Storage(format!("No se pudo crear {}: {}", parent.display(), e))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = open_for_write(&temp_path, private)
        .map_err(|e| AdminError::Storage(format!("No se pudo crear archivo temporal: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| AdminError::Storage(format!("No se pudo serializar: {}", e)))?;
    writer
        .flush()
        .map_err(|e| AdminError::Storage(format!("No se pudo escribir: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| AdminError::Storage(format!("No se pudo sincronizar: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AdminError::Storage(format!("No se pudo reemplazar {}: {}", path.display(), e))
    })
}

#[cfg(unix)]
fn open_for_write(path: &Path, private: bool) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    if private {
        options.mode(0o600);
    }
    options.open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path, _private: bool) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Remove a file, treating "already gone" as success
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> Result<(), AdminError> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AdminError::Storage(format!(
            "No se pudo eliminar {}: {}",
            path.display(),
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        name: String,
        value: i32,
    }

    fn sample() -> Sample {
        Sample {
            name: "radio".to_string(),
            value: 7,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let data: Sample = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(data, Sample::default());

        let none: Option<Sample> = read_json_optional(temp_dir.path().join("missing.json")).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_write_and_read_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data.json");

        write_json_atomic(&path, &sample()).unwrap();

        let loaded: Sample = read_json(&path).unwrap();
        assert_eq!(loaded, sample());
        assert!(!temp_dir.path().join("nested").join("data.json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_private_write_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        write_json_private(&path, &sample()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();

        assert!(read_json::<Sample, _>(&path).is_err());
    }

    #[test]
    fn test_remove_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.json");

        remove_if_exists(&path).unwrap();
        write_json_atomic(&path, &sample()).unwrap();
        remove_if_exists(&path).unwrap();
        assert!(!path.exists());
    }
}

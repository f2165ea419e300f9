use super::*;

use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Read, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Directory-backed storage: each key lives in `<dir>/<key>.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a failed write leaves the previous value in place.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Result<Self, AppError> {
        if dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "storage directory must not be empty".to_string(),
            ));
        }

        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn replace<F>(&self, key: &str, write: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
    {
        let path = self.path_for(key);
        create_file_parent(&path)?;

        // dropped (and removed) on any early return
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        write(&mut tmp)?;
        tmp.as_file().sync_all()?;

        tmp.persist(&path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut file = match OpenOptions::new().read(true).open(self.path_for(key)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut data = String::new();
        file.read_to_string(&mut data)?;
        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.replace(key, |file| {
            file.write_all(value.as_bytes())?;
            file.flush()
        })
    }

    fn get_medium(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_key_reads_as_none() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path())?;

        assert_eq!(storage.get("contacts_v1")?, None);
        Ok(())
    }

    #[test]
    fn set_creates_directory_and_overwrites() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(&dir.path().join("nested").join(".instance"))?;

        storage.set("contacts_v1", r#"[{"long":"value"}]"#)?;
        storage.set("contacts_v1", "[]")?;

        assert_eq!(storage.get("contacts_v1")?, Some("[]".to_string()));
        assert!(storage.path_for("contacts_v1").exists());
        Ok(())
    }

    #[test]
    fn failed_write_keeps_previous_value() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path())?;
        let previous = r#"[{"id":"a","name":"Ana","phone":"123"}]"#;
        storage.set("contacts_v1", previous)?;

        let err = storage
            .replace("contacts_v1", |file| {
                file.write_all(b"[{\"id\":\"b\",\"na")?;
                Err(io::Error::other("File too large"))
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(storage.get("contacts_v1")?, Some(previous.to_string()));

        let leftovers: Vec<_> = fs::read_dir(dir.path())?.collect::<Result<_, _>>()?;
        assert_eq!(leftovers.len(), 1);
        Ok(())
    }

    #[test]
    fn rejects_empty_directory() {
        assert!(FileStorage::new(Path::new("")).is_err());
    }

    #[test]
    fn reports_file_medium() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;

        assert_eq!(FileStorage::new(dir.path())?.get_medium(), "file");
        Ok(())
    }
}

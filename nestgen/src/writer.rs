//! Writing generated files to disk
//!
//! The writer owns the output root and a [`DirectoryPolicy`], the caller's
//! decision on whether module directories may be created. The default policy,
//! [`RequireExisting`], creates nothing, so a missing module directory surfaces
//! as a write error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GenerateError, Result};
use crate::generator::GeneratedFile;

/// Step run before writing into a module directory
pub trait DirectoryPolicy {
    /// Make sure `dir` is ready to receive files
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be prepared.
    fn ensure_dir(&self, dir: &Path) -> Result<()>;
}

/// Leave directories alone; writes into a missing directory fail
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireExisting;

impl DirectoryPolicy for RequireExisting {
    fn ensure_dir(&self, _dir: &Path) -> Result<()> {
        Ok(())
    }
}

/// Create missing directories, including parents
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateMissing;

impl DirectoryPolicy for CreateMissing {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }
}

impl<F> DirectoryPolicy for F
where
    F: Fn(&Path) -> Result<()>,
{
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        self(dir)
    }
}

/// How a file on disk compares to its freshly rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content matches byte for byte
    UpToDate,
    /// File exists with different content
    Stale {
        /// Current content on disk
        on_disk: String,
    },
    /// File does not exist
    Missing,
}

/// Writes generated files below an output root
#[derive(Debug, Clone)]
pub struct FileWriter<P = RequireExisting> {
    root: PathBuf,
    policy: P,
}

impl FileWriter<RequireExisting> {
    /// Writer that never creates directories
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_policy(root, RequireExisting)
    }
}

impl<P: DirectoryPolicy> FileWriter<P> {
    /// Writer with a caller-supplied directory policy
    #[must_use]
    pub fn with_policy(root: impl Into<PathBuf>, policy: P) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    /// Output root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (or root-relative) target of a generated file
    #[must_use]
    pub fn target(&self, file: &GeneratedFile) -> PathBuf {
        self.root.join(&file.path)
    }

    /// Write one file, overwriting any existing content
    ///
    /// # Errors
    ///
    /// Returns the policy's error, or [`GenerateError::Write`] if the file
    /// cannot be written.
    pub fn write(&self, file: &GeneratedFile) -> Result<PathBuf> {
        let target = self.target(file);

        if let Some(parent) = target.parent() {
            self.policy.ensure_dir(parent)?;
        }

        fs::write(&target, &file.content).map_err(|source| GenerateError::Write {
            path: target.clone(),
            source,
        })?;

        tracing::info!(path = %target.display(), kind = %file.kind, "wrote file");
        Ok(target)
    }

    /// Compare a generated file with what is on disk, without writing
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Read`] for read failures other than a missing
    /// file.
    pub fn compare(&self, file: &GeneratedFile) -> Result<FileStatus> {
        let target = self.target(file);

        match fs::read_to_string(&target) {
            Ok(on_disk) if on_disk == file.content => Ok(FileStatus::UpToDate),
            Ok(on_disk) => Ok(FileStatus::Stale { on_disk }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FileStatus::Missing),
            Err(source) => Err(GenerateError::Read {
                path: target,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::ArtifactKind;
    use std::cell::RefCell;
    use tempfile::tempdir;

    fn sample_file() -> GeneratedFile {
        GeneratedFile {
            path: PathBuf::from("deals/deals.module.ts"),
            content: "export class DealsModule {}\n".to_string(),
            kind: ArtifactKind::Module,
            description: "NestJS module for deals".to_string(),
        }
    }

    #[test]
    fn test_require_existing_fails_on_missing_dir() {
        let temp_dir = tempdir().unwrap();
        let writer = FileWriter::new(temp_dir.path());

        let err = writer.write(&sample_file()).unwrap_err();
        assert!(matches!(err, GenerateError::Write { .. }));
        assert!(!temp_dir.path().join("deals").exists());
    }

    #[test]
    fn test_require_existing_writes_into_existing_dir() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("deals")).unwrap();
        let writer = FileWriter::new(temp_dir.path());

        let target = writer.write(&sample_file()).unwrap();
        assert_eq!(target, temp_dir.path().join("deals/deals.module.ts"));
        assert_eq!(
            fs::read_to_string(target).unwrap(),
            "export class DealsModule {}\n"
        );
    }

    #[test]
    fn test_create_missing_creates_dir() {
        let temp_dir = tempdir().unwrap();
        let writer = FileWriter::with_policy(temp_dir.path().join("src"), CreateMissing);

        let target = writer.write(&sample_file()).unwrap();
        assert!(target.exists());
    }

    #[test]
    fn test_closure_policy_is_called() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("deals")).unwrap();
        let seen = RefCell::new(Vec::new());
        let policy = |dir: &Path| -> Result<()> {
            seen.borrow_mut().push(dir.to_path_buf());
            Ok(())
        };
        {
            let writer = FileWriter::with_policy(temp_dir.path(), policy);
            writer.write(&sample_file()).unwrap();
        }
        assert_eq!(seen.into_inner(), vec![temp_dir.path().join("deals")]);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("deals")).unwrap();
        fs::write(temp_dir.path().join("deals/deals.module.ts"), "old").unwrap();
        let writer = FileWriter::new(temp_dir.path());

        let target = writer.write(&sample_file()).unwrap();
        assert_eq!(
            fs::read_to_string(target).unwrap(),
            "export class DealsModule {}\n"
        );
    }

    #[test]
    fn test_compare() {
        let temp_dir = tempdir().unwrap();
        let writer = FileWriter::with_policy(temp_dir.path(), CreateMissing);
        let file = sample_file();

        assert_eq!(writer.compare(&file).unwrap(), FileStatus::Missing);

        writer.write(&file).unwrap();
        assert_eq!(writer.compare(&file).unwrap(), FileStatus::UpToDate);

        fs::write(writer.target(&file), "edited").unwrap();
        assert_eq!(
            writer.compare(&file).unwrap(),
            FileStatus::Stale {
                on_disk: "edited".to_string()
            }
        );
    }
}

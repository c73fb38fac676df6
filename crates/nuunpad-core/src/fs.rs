//! Filesystem helpers for placing export files atomically, with or without replacing
//! an existing file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Distinguishes temp files staged by threads of the same process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `bytes` to `destination` so readers never observe a half-written file.
///
/// The bytes go to a hidden temp file next to the destination, which is synced and
/// then renamed into place. An existing destination is replaced. The temp file is
/// removed if any step fails.
///
/// # Errors
///
/// Returns an error if the parent directory is missing or not writable, or if the
/// final rename fails even after the fallback attempt.
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp_path = stage(destination, bytes)?;
    rename_with_fallback(&temp_path, destination)
}

/// Write `bytes` to the first candidate path that does not exist yet.
///
/// Existing files are never replaced: each candidate is claimed with a hard link from
/// a synced temp file, which fails with `AlreadyExists` instead of clobbering, so two
/// writers racing for the same name cannot both win it. Filesystems without hard
/// links fall back to an exclusive create. Candidates are expected to share a
/// directory; the temp file is staged next to the first one.
///
/// Returns the claimed path, or `None` when every candidate was taken.
pub fn write_first_free<I>(candidates: I, bytes: &[u8]) -> io::Result<Option<PathBuf>>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut candidates = candidates.into_iter().peekable();
    let temp_path = match candidates.peek() {
        Some(first) => stage(first, bytes)?,
        None => return Ok(None),
    };

    let claimed = claim_first(&temp_path, candidates, bytes);
    let _ = fs::remove_file(&temp_path);
    claimed
}

fn claim_first(
    temp_path: &Path,
    candidates: impl Iterator<Item = PathBuf>,
    bytes: &[u8],
) -> io::Result<Option<PathBuf>> {
    for candidate in candidates {
        let linked = fs::hard_link(temp_path, &candidate).or_else(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => Err(err),
            _ => create_new(&candidate, bytes),
        });
        match linked {
            Ok(()) => return Ok(Some(candidate)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(None)
}

fn create_new(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)?;
    if let Err(err) = file.write_all(bytes).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(destination);
        return Err(err);
    }
    Ok(())
}

/// Write `bytes` to a synced hidden temp file next to `destination`.
fn stage(destination: &Path, bytes: &[u8]) -> io::Result<PathBuf> {
    let temp_path = temp_path_for(destination)?;

    let written = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    Ok(temp_path)
}

/// Rename `temp_path` onto `destination`, replacing it if the platform refuses to.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already
/// exists. The destination is removed and the rename retried once; on a second failure
/// the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

fn temp_path_for(destination: &Path) -> io::Result<PathBuf> {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Destination has no file name: {}", destination.display()),
            )
        })?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let temp_name = format!(
        ".{}.{}.{}.{}.tmp",
        file_name,
        std::process::id(),
        nanos,
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    Ok(destination.with_file_name(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("notes.json");

        write_atomic(&dest, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "{}");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("notes.json");
        File::create(&dest).unwrap().write_all(b"old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_missing_parent_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("notes.json");

        assert!(write_atomic(&dest, b"{}").is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_write_first_free_skips_existing() {
        let dir = tempdir().unwrap();
        let taken = dir.path().join("a.json");
        let free = dir.path().join("b.json");
        fs::write(&taken, "old").unwrap();

        let claimed = write_first_free([taken.clone(), free.clone()], b"new").unwrap();

        assert_eq!(claimed, Some(free.clone()));
        assert_eq!(fs::read_to_string(&taken).unwrap(), "old");
        assert_eq!(fs::read_to_string(&free).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_write_first_free_none_when_all_taken() {
        let dir = tempdir().unwrap();
        let taken = dir.path().join("a.json");
        fs::write(&taken, "old").unwrap();

        assert_eq!(write_first_free([taken.clone()], b"new").unwrap(), None);
        assert_eq!(write_first_free(Vec::new(), b"new").unwrap(), None);
        assert_eq!(fs::read_to_string(&taken).unwrap(), "old");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_first_free_missing_parent_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("notes.json");

        assert!(write_first_free([dest.clone()], b"{}").is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_create_new_refuses_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("notes.json");
        fs::write(&dest, "old").unwrap();

        let err = create_new(&dest, b"new").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
    }

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}

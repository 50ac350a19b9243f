use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

/// Recursively copies a directory tree.
///
/// Blocking; run it on `tokio::task::spawn_blocking` from async code.
///
/// # Arguments
/// - `src` - Existing directory to copy from
/// - `dst` - Destination directory, created if missing
///
/// # Returns
/// - `Ok(())` - Every file and subdirectory was copied
/// - `Err(io::Error)` - Reading the source or writing the destination failed
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dst)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Writes `contents` to `path` by writing a sibling temp file and renaming it
/// over the destination, so readers never observe a half-written file.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(path);

    tokio::fs::write(&tmp, contents).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e);
    }

    Ok(())
}

/// Removes a directory tree, treating an already missing directory as success.
pub async fn remove_dir_if_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("record"));
    name.push(".tmp");
    path.with_file_name(name)
}

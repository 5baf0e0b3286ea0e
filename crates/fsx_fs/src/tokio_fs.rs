use std::ffi::OsString;
use std::io::{self, SeekFrom};
use std::path::Path;

use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

use crate::primitive::{FileStat, FsPrimitive, OpenMode};

/// [`FsPrimitive`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait::async_trait]
impl FsPrimitive for TokioFs {
    type Handle = File;

    async fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(FileStat::from(&meta))
    }

    async fn lstat(&self, path: &Path) -> io::Result<FileStat> {
        let meta = tokio::fs::symlink_metadata(path).await?;
        Ok(FileStat::from(&meta))
    }

    async fn open(&self, path: &Path, mode: OpenMode) -> io::Result<File> {
        let mut options = OpenOptions::new();
        match mode {
            OpenMode::Read => options.read(true),
            OpenMode::Write => options.write(true).create(true).truncate(true),
            OpenMode::Append => options.append(true).create(true),
            OpenMode::ReadWrite => options.read(true).write(true),
        };
        options.open(path).await
    }

    async fn read(&self, handle: &mut File, buffer: &mut [u8], position: u64) -> io::Result<usize> {
        handle.seek(SeekFrom::Start(position)).await?;

        let mut filled = 0;
        while filled < buffer.len() {
            match handle.read(&mut buffer[filled..]).await {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        Ok(filled)
    }

    async fn close(&self, mut handle: File) -> io::Result<()> {
        // Waits for any in-flight operation so its error is not lost on drop
        handle.flush().await
    }

    async fn unlink(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }

    async fn rmdir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_dir(path).await
    }

    async fn readdir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut dir = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            names.push(entry.file_name());
        }
        Ok(names)
    }

    async fn mkdir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

use std::ffi::OsString;
use std::path::Path;

use crate::encoding::Encoding;
use crate::error::{Error, PathContext, Result};
use crate::primitive::{FsPrimitive, OpenMode};

impl<P: FsPrimitive> crate::Fsx<P> {
    pub async fn open<T: AsRef<Path>>(&self, path: T, mode: OpenMode) -> Result<P::Handle> {
        let path = path.as_ref();
        self.primitive
            .open(path, mode)
            .await
            .path_context(path, Error::Open)
    }

    /// Reads from an open handle into `buffer` at file `position`, returning
    /// the number of bytes read.
    pub async fn read(
        &self,
        handle: &mut P::Handle,
        buffer: &mut [u8],
        position: u64,
    ) -> Result<usize> {
        self.primitive
            .read(handle, buffer, position)
            .await
            .map_err(Error::ReadHandle)
    }

    pub async fn close(&self, handle: P::Handle) -> Result<()> {
        self.primitive
            .close(handle)
            .await
            .map_err(Error::CloseHandle)
    }

    pub async fn read_file<T: AsRef<Path>>(&self, path: T) -> Result<Vec<u8>> {
        let path = path.as_ref();
        self.primitive
            .read_file(path)
            .await
            .path_context(path, Error::ReadFile)
    }

    /// Reads a whole file and decodes it with `encoding`.
    pub async fn read_to_string<T: AsRef<Path>>(
        &self,
        path: T,
        encoding: Encoding,
    ) -> Result<String> {
        self.read_file(path)
            .await
            .map(|bytes| encoding.decode(&bytes))
    }

    pub async fn readdir<T: AsRef<Path>>(&self, path: T) -> Result<Vec<OsString>> {
        let path = path.as_ref();
        self.primitive
            .readdir(path)
            .await
            .path_context(path, Error::ReadDir)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tokio::fs;

    use crate::test_fs::FaultyFs;
    use crate::{Encoding, Error, Fsx, OpenMode};

    #[tokio::test]
    async fn test_read_to_string() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hello.txt");
        fs::write(&path, "Hello 世界").await?;
        let fsx = Fsx::new();

        assert_eq!(fsx.read_to_string(&path, Encoding::Utf8).await?, "Hello 世界");
        assert!(fsx
            .read_to_string(&path, Encoding::Hex)
            .await?
            .starts_with("4865"));
        Ok(())
    }

    #[tokio::test]
    async fn test_read_file_missing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let fsx = Fsx::new();

        let err = fsx.read_file(dir.path().join("missing")).await.unwrap_err();

        assert!(matches!(err, Error::ReadFile(..)));
        assert!(err.is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn test_open_read_close_passthrough() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data.bin");
        fs::write(&path, b"abcdef").await?;
        let fsx = Fsx::new();

        let mut handle = fsx.open(&path, OpenMode::Read).await?;
        let mut buffer = [0u8; 3];
        let read = fsx.read(&mut handle, &mut buffer, 2).await?;
        fsx.close(handle).await?;

        assert_eq!(read, 3);
        assert_eq!(&buffer, b"cde");
        Ok(())
    }

    #[tokio::test]
    async fn test_readdir_lists_entry_names() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("a.txt"), "a").await?;
        fs::create_dir(dir.path().join("sub")).await?;
        let fsx = Fsx::new();

        let mut names: Vec<_> = fsx
            .readdir(dir.path())
            .await?
            .into_iter()
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.txt".to_string(), "sub".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_handle_read_and_close_failures() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data.bin");
        fs::write(&path, b"abcdef").await?;
        let fsx = Fsx::with_primitive(FaultyFs::default().fail_read(true).fail_close(true));

        let mut handle = fsx.open(&path, OpenMode::Read).await?;
        let mut buffer = [0u8; 3];
        let read_err = fsx.read(&mut handle, &mut buffer, 0).await.unwrap_err();
        let close_err = fsx.close(handle).await.unwrap_err();

        assert!(matches!(read_err, Error::ReadHandle(..)));
        assert!(matches!(close_err, Error::CloseHandle(..)));
        assert_eq!(
            close_err.io_error().map(|err| err.kind()),
            Some(std::io::ErrorKind::PermissionDenied)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_load_json_missing_reports_read_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let fsx = Fsx::new();

        let err = fsx
            .load_json::<serde_json::Value, _>(dir.path().join("missing.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ReadFile(..)));
        assert!(err.is_not_found());
        Ok(())
    }
}

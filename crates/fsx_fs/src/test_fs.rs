use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use derive_setters::Setters;

use crate::primitive::{FileStat, FsPrimitive, OpenMode};
use crate::tokio_fs::TokioFs;

/// Real filesystem with switchable failures and handle accounting.
#[derive(Debug, Default, Setters)]
pub struct FaultyFs {
    #[setters(skip)]
    inner: TokioFs,

    fail_read: bool,

    fail_close: bool,

    /// Unlinking an entry with this file name fails with `PermissionDenied`
    #[setters(strip_option, into)]
    fail_unlink: Option<OsString>,

    #[setters(skip)]
    opens: AtomicUsize,

    #[setters(skip)]
    closes: AtomicUsize,
}

impl FaultyFs {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

fn injected() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "injected failure")
}

#[async_trait::async_trait]
impl FsPrimitive for FaultyFs {
    type Handle = <TokioFs as FsPrimitive>::Handle;

    async fn stat(&self, path: &Path) -> io::Result<FileStat> {
        self.inner.stat(path).await
    }

    async fn lstat(&self, path: &Path) -> io::Result<FileStat> {
        self.inner.lstat(path).await
    }

    async fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Self::Handle> {
        let handle = self.inner.open(path, mode).await?;
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(handle)
    }

    async fn read(
        &self,
        handle: &mut Self::Handle,
        buffer: &mut [u8],
        position: u64,
    ) -> io::Result<usize> {
        if self.fail_read {
            return Err(injected());
        }
        self.inner.read(handle, buffer, position).await
    }

    async fn close(&self, handle: Self::Handle) -> io::Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        self.inner.close(handle).await?;
        if self.fail_close {
            return Err(injected());
        }
        Ok(())
    }

    async fn unlink(&self, path: &Path) -> io::Result<()> {
        if self.fail_unlink.is_some() && self.fail_unlink.as_deref() == path.file_name() {
            return Err(injected());
        }
        self.inner.unlink(path).await
    }

    async fn rmdir(&self, path: &Path) -> io::Result<()> {
        self.inner.rmdir(path).await
    }

    async fn readdir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        self.inner.readdir(path).await
    }

    async fn mkdir_all(&self, path: &Path) -> io::Result<()> {
        self.inner.mkdir_all(path).await
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.inner.read_file(path).await
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.inner.write_file(path, contents).await
    }
}

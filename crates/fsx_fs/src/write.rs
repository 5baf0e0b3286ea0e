use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, PathContext, Result};
use crate::primitive::FsPrimitive;

impl<P: FsPrimitive> crate::Fsx<P> {
    /// Creates `path` and any missing ancestors. Succeeds if it already
    /// exists as a directory.
    pub async fn ensure_dir<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        self.primitive
            .mkdir_all(path)
            .await
            .path_context(path, Error::CreateDir)
    }

    pub async fn write_file<T: AsRef<Path>, U: AsRef<[u8]>>(&self, path: T, contents: U) -> Result<()> {
        let path = path.as_ref();
        self.primitive
            .write_file(path, contents.as_ref())
            .await
            .path_context(path, Error::WriteFile)
    }

    /// Removes a single file. A file that is already gone counts as removed.
    pub async fn unlink<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        match self.primitive.unlink(path).await {
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "File already absent");
                Ok(())
            }
            result => result.path_context(path, Error::Unlink),
        }
    }

    /// Removes an empty directory.
    pub async fn rmdir<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        self.primitive
            .rmdir(path)
            .await
            .path_context(path, Error::RemoveDir)
    }
}

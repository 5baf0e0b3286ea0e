use std::path::Path;

use async_recursion::async_recursion;
use tracing::debug;

use crate::error::{Error, Result};
use crate::primitive::FsPrimitive;

impl<P: FsPrimitive> crate::Fsx<P> {
    /// Deletes the directory at `path` together with everything below it.
    ///
    /// A missing path is not an error. A path that exists but is not a
    /// directory fails with [`Error::NotADirectory`] and is left untouched.
    pub async fn remove_dir<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        match self.lstat_if_exists(path).await? {
            None => {
                debug!(path = %path.display(), "Directory already absent");
                Ok(())
            }
            Some(stat) if stat.is_directory() => self.remove_tree(path).await,
            Some(_) => Err(Error::NotADirectory(path.to_path_buf())),
        }
    }

    /// Deletes whatever is at `path`: a directory tree or a single file.
    /// A missing path is not an error.
    pub async fn remove<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        match self.lstat_if_exists(path).await? {
            None => {
                debug!(path = %path.display(), "Path already absent");
                Ok(())
            }
            Some(stat) if stat.is_directory() => self.remove_tree(path).await,
            Some(_) => self.unlink(path).await,
        }
    }

    /// Depth-first, post-order deletion of `dir`. Entries are handled one at
    /// a time in listing order; the first failure aborts the walk and
    /// whatever was already deleted stays deleted.
    #[async_recursion]
    async fn remove_tree(&self, dir: &Path) -> Result<()> {
        debug!(path = %dir.display(), "Removing directory tree");

        for name in self.readdir(dir).await? {
            let child = dir.join(name);
            // Symlinks are unlinked, never followed
            if self.lstat(&child).await?.is_directory() {
                self.remove_tree(&child).await?;
            } else {
                self.unlink(&child).await?;
            }
        }

        self.rmdir(dir).await
    }
}

use std::io;
use std::path::Path;

use crate::error::{Error, PathContext, Result};
use crate::primitive::{FileKind, FileStat, FsPrimitive};

impl<P: FsPrimitive> crate::Fsx<P> {
    pub async fn stat<T: AsRef<Path>>(&self, path: T) -> Result<FileStat> {
        let path = path.as_ref();
        self.primitive.stat(path).await.path_context(path, Error::Stat)
    }

    pub async fn lstat<T: AsRef<Path>>(&self, path: T) -> Result<FileStat> {
        let path = path.as_ref();
        self.primitive.lstat(path).await.path_context(path, Error::Stat)
    }

    /// Stats `path`, resolving a missing path to `None` instead of an error.
    pub(crate) async fn stat_if_exists(&self, path: &Path) -> Result<Option<FileStat>> {
        missing_as_none(self.primitive.stat(path).await).path_context(path, Error::Stat)
    }

    /// Like [`Self::stat_if_exists`] but does not follow a trailing symlink.
    pub(crate) async fn lstat_if_exists(&self, path: &Path) -> Result<Option<FileStat>> {
        missing_as_none(self.primitive.lstat(path).await).path_context(path, Error::Stat)
    }

    async fn has_kind(&self, path: &Path, kind: FileKind) -> Result<bool> {
        let stat = self.stat_if_exists(path).await?;
        Ok(stat.is_some_and(|stat| stat.kind == kind))
    }

    pub async fn exists<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        Ok(self.stat_if_exists(path.as_ref()).await?.is_some())
    }

    pub async fn is_file<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        self.has_kind(path.as_ref(), FileKind::File).await
    }

    pub async fn is_directory<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        self.has_kind(path.as_ref(), FileKind::Directory).await
    }

    /// Alias of [`Self::is_directory`].
    pub async fn is_dir_exists<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        self.is_directory(path).await
    }

    pub async fn is_fifo<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        self.has_kind(path.as_ref(), FileKind::Fifo).await
    }

    pub async fn is_socket<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        self.has_kind(path.as_ref(), FileKind::Socket).await
    }

    pub async fn is_block_device<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        self.has_kind(path.as_ref(), FileKind::BlockDevice).await
    }

    pub async fn is_character_device<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        self.has_kind(path.as_ref(), FileKind::CharacterDevice).await
    }

    /// Checks the path itself rather than what it points to, so a dangling
    /// link still reports `true`.
    pub async fn is_symbolic_link<T: AsRef<Path>>(&self, path: T) -> Result<bool> {
        let stat = self.lstat_if_exists(path.as_ref()).await?;
        Ok(stat.is_some_and(|stat| stat.kind == FileKind::SymbolicLink))
    }
}

fn missing_as_none<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

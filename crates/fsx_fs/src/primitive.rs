use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Kind of filesystem object reported by a stat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    SymbolicLink,
    Fifo,
    Socket,
    BlockDevice,
    CharacterDevice,
    Other,
}

/// The part of a stat result this crate cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub kind: FileKind,
    pub len: u64,
}

impl FileStat {
    pub fn new(kind: FileKind, len: u64) -> Self {
        Self { kind, len }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == FileKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == FileKind::File
    }
}

impl From<&std::fs::Metadata> for FileStat {
    fn from(meta: &std::fs::Metadata) -> Self {
        let file_type = meta.file_type();
        let kind = if file_type.is_symlink() {
            FileKind::SymbolicLink
        } else if file_type.is_dir() {
            FileKind::Directory
        } else if file_type.is_file() {
            FileKind::File
        } else {
            special_kind(&file_type)
        };
        Self::new(kind, meta.len())
    }
}

#[cfg(unix)]
fn special_kind(file_type: &std::fs::FileType) -> FileKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_fifo() {
        FileKind::Fifo
    } else if file_type.is_socket() {
        FileKind::Socket
    } else if file_type.is_block_device() {
        FileKind::BlockDevice
    } else if file_type.is_char_device() {
        FileKind::CharacterDevice
    } else {
        FileKind::Other
    }
}

#[cfg(not(unix))]
fn special_kind(_: &std::fs::FileType) -> FileKind {
    FileKind::Other
}

/// How a file handle is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    #[default]
    Read,
    /// Create if missing, truncate otherwise
    Write,
    /// Create if missing, write at the end
    Append,
    ReadWrite,
}

/// The filesystem operations `Fsx` is built on.
///
/// Every method is a single OS call (or the closest async equivalent) and
/// reports failures as raw `io::Error`s; `Fsx` attaches paths and decides
/// which failures are tolerated.
#[async_trait::async_trait]
pub trait FsPrimitive: Send + Sync {
    /// An open file. Consumed by [`FsPrimitive::close`].
    type Handle: Send;

    /// Stat following symbolic links.
    async fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Stat without following a trailing symbolic link.
    async fn lstat(&self, path: &Path) -> io::Result<FileStat>;

    async fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Self::Handle>;

    /// Reads into `buffer` starting at `position` in the file until the
    /// buffer is full or end-of-file is reached. Returns the number of bytes
    /// read.
    async fn read(
        &self,
        handle: &mut Self::Handle,
        buffer: &mut [u8],
        position: u64,
    ) -> io::Result<usize>;

    async fn close(&self, handle: Self::Handle) -> io::Result<()>;

    async fn unlink(&self, path: &Path) -> io::Result<()>;

    async fn rmdir(&self, path: &Path) -> io::Result<()>;

    /// Entry names of a directory in the order the OS lists them.
    async fn readdir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Creates a directory and all of its missing ancestors.
    async fn mkdir_all(&self, path: &Path) -> io::Result<()>;

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

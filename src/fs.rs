use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

pub mod memory;

pub use memory::MemoryFileSystem;

/// Permissions given to a Makefile created by [`FileSystem::write`].
pub const MAKEFILE_MODE: u32 = 0o644;

/// The file system operations needed to generate and extend a Makefile.
///
/// Not-found conditions must be reported with [`io::ErrorKind::NotFound`] so
/// that callers can tell them apart from other failures.
pub trait FileSystem {
    type Appender<'a>: Write
    where
        Self: 'a;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Creates or truncates `path` and writes `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Opens an existing file for appending; never creates it.
    fn open_append<'a>(&'a self, path: &Path) -> io::Result<Self::Appender<'a>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    type Appender<'a>
        = T::Appender<'a>
    where
        Self: 'a;

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        (**self).is_dir(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn open_append<'a>(&'a self, path: &Path) -> io::Result<Self::Appender<'a>> {
        (**self).open_append(path)
    }
}

/// [`FileSystem`] backed by [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    type Appender<'a> = File;

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(std::fs::metadata(path)?.is_dir())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(MAKEFILE_MODE);
        }
        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.flush()
    }

    fn open_append<'a>(&'a self, path: &Path) -> io::Result<File> {
        OpenOptions::new().append(true).open(path)
    }
}

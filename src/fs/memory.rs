use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::fs::FileSystem;

/// One call made against a [`MemoryFileSystem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Stat(PathBuf),
    Read(PathBuf),
    Write(PathBuf),
    OpenAppend(PathBuf),
    Append(PathBuf),
}

/// Operation kinds that can be scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Stat,
    Read,
    Write,
    OpenAppend,
    Append,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Stat(_) => OperationKind::Stat,
            Operation::Read(_) => OperationKind::Read,
            Operation::Write(_) => OperationKind::Write,
            Operation::OpenAppend(_) => OperationKind::OpenAppend,
            Operation::Append(_) => OperationKind::Append,
        }
    }
}

#[derive(Debug, Clone)]
enum Entry {
    File(Vec<u8>),
    Dir,
}

/// In-memory [`FileSystem`] with scripted failures.
///
/// Every call is recorded in an operation log so tests can assert which file
/// system calls were (or were not) performed.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: RefCell<BTreeMap<PathBuf, Entry>>,
    failures: HashMap<OperationKind, (io::ErrorKind, String)>,
    log: RefCell<Vec<Operation>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.entries.borrow_mut().insert(path.into(), Entry::Dir);
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.entries
            .borrow_mut()
            .insert(path.into(), Entry::File(contents.into()));
        self
    }

    /// Makes every subsequent call of `kind` fail with the given error.
    pub fn failing(mut self, kind: OperationKind, error: io::ErrorKind, message: impl Into<String>) -> Self {
        self.failures.insert(kind, (error, message.into()));
        self
    }

    /// Contents of the file at `path`, if it is a file.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.entries.borrow().get(path.as_ref())? {
            Entry::File(contents) => Some(contents.clone()),
            Entry::Dir => None,
        }
    }

    pub fn contents_string(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path)
            .map(|c| String::from_utf8_lossy(&c).into_owned())
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.log.borrow().clone()
    }

    fn record(&self, op: Operation) -> io::Result<()> {
        let kind = op.kind();
        self.log.borrow_mut().push(op);
        match self.failures.get(&kind) {
            Some((error, message)) => Err(io::Error::new(*error, message.clone())),
            None => Ok(()),
        }
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: no such file or directory", path.display()),
        )
    }

    fn is_a_directory(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{}: is a directory", path.display()),
        )
    }
}

impl FileSystem for MemoryFileSystem {
    type Appender<'a> = MemoryAppender<'a>;

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        self.record(Operation::Stat(path.to_path_buf()))?;
        match self.entries.borrow().get(path) {
            Some(Entry::Dir) => Ok(true),
            Some(Entry::File(_)) => Ok(false),
            None => Err(Self::not_found(path)),
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.record(Operation::Read(path.to_path_buf()))?;
        match self.entries.borrow().get(path) {
            Some(Entry::File(contents)) => Ok(contents.clone()),
            Some(Entry::Dir) => Err(Self::is_a_directory(path)),
            None => Err(Self::not_found(path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.record(Operation::Write(path.to_path_buf()))?;
        let mut entries = self.entries.borrow_mut();
        if let Some(Entry::Dir) = entries.get(path) {
            return Err(Self::is_a_directory(path));
        }
        entries.insert(path.to_path_buf(), Entry::File(contents.to_vec()));
        Ok(())
    }

    fn open_append<'a>(&'a self, path: &Path) -> io::Result<MemoryAppender<'a>> {
        self.record(Operation::OpenAppend(path.to_path_buf()))?;
        match self.entries.borrow().get(path) {
            Some(Entry::File(_)) => Ok(MemoryAppender {
                fs: self,
                path: path.to_path_buf(),
            }),
            Some(Entry::Dir) => Err(Self::is_a_directory(path)),
            None => Err(Self::not_found(path)),
        }
    }
}

/// Append handle returned by [`MemoryFileSystem::open_append`].
#[derive(Debug)]
pub struct MemoryAppender<'a> {
    fs: &'a MemoryFileSystem,
    path: PathBuf,
}

impl Write for MemoryAppender<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.fs.record(Operation::Append(self.path.clone()))?;
        match self.fs.entries.borrow_mut().get_mut(&self.path) {
            Some(Entry::File(contents)) => {
                contents.extend_from_slice(buf);
                Ok(buf.len())
            }
            _ => Err(MemoryFileSystem::not_found(&self.path)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_requires_existing_file() {
        let fs = MemoryFileSystem::new();
        let err = fs.open_append(Path::new("Makefile")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs.contents("Makefile"), None);
    }

    #[test]
    fn append_extends_file() {
        let fs = MemoryFileSystem::new().with_file("Makefile", "a");
        fs.open_append(Path::new("Makefile"))
            .unwrap()
            .write_all(b"bc")
            .unwrap();
        assert_eq!(fs.contents_string("Makefile").unwrap(), "abc");
    }

    #[test]
    fn scripted_failure_is_logged() {
        let fs = MemoryFileSystem::new()
            .with_file("Makefile", "")
            .failing(OperationKind::Read, io::ErrorKind::PermissionDenied, "read error");
        let err = fs.read(Path::new("Makefile")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "read error");
        assert_eq!(fs.operations(), vec![Operation::Read("Makefile".into())]);
    }

    #[test]
    fn stat_distinguishes_dirs() {
        let fs = MemoryFileSystem::new()
            .with_dir("project")
            .with_file("project/Makefile", "");
        assert!(fs.is_dir(Path::new("project")).unwrap());
        assert!(!fs.is_dir(Path::new("project/Makefile")).unwrap());
        assert_eq!(
            fs.is_dir(Path::new("other")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}

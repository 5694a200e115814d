use std::path::{Component, Path, PathBuf};

use crate::fs::FileSystem;

/// File name used when the user points at a directory.
pub const MAKEFILE_NAME: &str = "Makefile";

/// Lexically normalizes `path`.
///
/// Redundant separators and `.` components are dropped and `name/..` pairs are
/// collapsed. A `..` directly under the root is removed, while leading `..`
/// components of a relative path are kept. An empty result becomes `.`.
/// Symlinks are not consulted.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | None => components.push(component),
                Some(Component::CurDir) => unreachable!("`.` components are never kept"),
            },
            _ => components.push(component),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

/// Resolves the Makefile that `path` designates.
///
/// An existing directory resolves to `<dir>/Makefile`. Anything else, including
/// paths that cannot be inspected, is taken to be the Makefile itself.
pub fn resolve(fs: &impl FileSystem, path: impl AsRef<Path>) -> PathBuf {
    let path = normalize(path);
    match fs.is_dir(&path) {
        Ok(true) => {
            let resolved = path.join(MAKEFILE_NAME);
            log::debug!("{} is a directory, using {}", path.display(), resolved.display());
            resolved
        }
        Ok(false) => path,
        Err(e) => {
            log::debug!("cannot stat {} ({e}), treating it as a file path", path.display());
            path
        }
    }
}

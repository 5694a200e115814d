use std::{io, path::{Path, PathBuf}};

use crate::{
    error::{IoOperation, MakefileError, TemplateStage},
    fs::{FileSystem, OsFileSystem},
    path::resolve,
    target::TargetSpec,
    template::{BOILERPLATE, HandlebarsRenderer, TemplateRenderer},
};

/// Generates and extends Makefiles through an injected [`FileSystem`] and
/// [`TemplateRenderer`].
#[derive(Debug, Clone, Default)]
pub struct MakefileGen<F = OsFileSystem, R = HandlebarsRenderer> {
    fs: F,
    renderer: R,
}

impl MakefileGen {
    /// A generator working on the real file system.
    pub fn os() -> Self {
        Self::default()
    }
}

impl<F: FileSystem, R: TemplateRenderer> MakefileGen<F, R> {
    pub fn new(fs: F, renderer: R) -> Self {
        Self { fs, renderer }
    }

    /// Writes the boilerplate to the Makefile designated by `path`.
    ///
    /// Unless `overwrite` is set, the current content of the file (if any) is
    /// kept after the boilerplate. The file is rewritten in full either way.
    /// Returns the path of the Makefile that was written.
    pub fn generate(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf, MakefileError> {
        let makefile = resolve(&self.fs, path);

        let mut content = BOILERPLATE.as_bytes().to_vec();
        if !overwrite {
            log::debug!("reading existing content of {}", makefile.display());
            match self.fs.read(&makefile) {
                Ok(existing) => content.extend_from_slice(&existing),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(MakefileError::io(IoOperation::Read, makefile, e)),
            }
        }

        log::debug!("writing {} bytes to {}", content.len(), makefile.display());
        self.fs
            .write(&makefile, &content)
            .map_err(|e| MakefileError::io(IoOperation::Write, &makefile, e))?;

        Ok(makefile)
    }

    /// Appends a phony target block to the existing Makefile designated by
    /// `path`. Returns the path of the Makefile that was extended.
    pub fn add_target(&self, path: impl AsRef<Path>, target: &TargetSpec) -> Result<PathBuf, MakefileError> {
        target.validate()?;

        let makefile = resolve(&self.fs, path);

        log::debug!("appending target `{}` to {}", target.name, makefile.display());
        let mut file = self
            .fs
            .open_append(&makefile)
            .map_err(|e| MakefileError::io(IoOperation::OpenAppend, &makefile, e))?;

        let template = target.template();
        log::trace!("rendering target `{}` with template `{}`", target.name, template.name());
        let compiled = self
            .renderer
            .parse(template.name(), template.text())
            .map_err(|e| MakefileError::template(TemplateStage::Parse, e))?;
        self.renderer
            .execute(&compiled, &target.data(), &mut file)
            .map_err(|e| MakefileError::template(TemplateStage::Execute, e))?;

        Ok(makefile)
    }
}

/// Writes the boilerplate Makefile at `path` on the real file system.
///
/// See [`MakefileGen::generate`].
pub fn generate(path: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf, MakefileError> {
    MakefileGen::os().generate(path, overwrite)
}

/// Appends `target` to the Makefile at `path` on the real file system.
///
/// See [`MakefileGen::add_target`].
pub fn add_target(path: impl AsRef<Path>, target: &TargetSpec) -> Result<PathBuf, MakefileError> {
    MakefileGen::os().add_target(path, target)
}

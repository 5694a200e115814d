pub mod cli;
pub mod error;
pub mod fs;
pub mod makefile;
pub mod path;
pub mod target;
pub mod template;

pub use error::{ErrorKind, InvalidArgument, MakefileError};
pub use makefile::{MakefileGen, add_target, generate};
pub use target::TargetSpec;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use crate::{TargetSpec, makefile};

/// Generate a Makefile and add phony targets to it.
///
/// `--path` may name either the Makefile itself or the directory that holds
/// it, in which case the file is called `Makefile`.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub enum Cli {
    Generate(Generate),
    #[clap(name = "addtarget")]
    AddTarget(AddTarget),
}

/// Generate a basic Makefile
#[derive(Parser, Debug)]
pub struct Generate {
    /// Path to the Makefile
    #[clap(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Overwrite the existing Makefile instead of keeping its content
    #[clap(short, long)]
    pub overwrite: bool,
}

/// Add a target to the Makefile
#[derive(Parser, Debug)]
pub struct AddTarget {
    /// Name of the target
    #[clap(short = 't', long = "target")]
    pub name: String,

    /// Command line run by the target
    #[clap(short, long, alias = "targetContent")]
    pub content: Option<String>,

    /// Prerequisite of the target, may be repeated
    #[clap(short, long = "dependency")]
    pub dependencies: Vec<String>,

    /// Path to the Makefile
    #[clap(short, long, default_value = ".")]
    pub path: PathBuf,
}

impl AddTarget {
    pub fn target(&self) -> TargetSpec {
        let mut target = TargetSpec::new(&self.name).with_dependencies(&self.dependencies);
        target.content = self.content.clone();
        target
    }
}

pub fn main(args: &Cli) -> anyhow::Result<()> {
    match args {
        Cli::Generate(args) => {
            let written = makefile::generate(&args.path, args.overwrite)?;
            println!(
                "Makefile was generated successfully at {}",
                display_path(&written).bold().green()
            );
        }
        Cli::AddTarget(args) => {
            let written = makefile::add_target(&args.path, &args.target())?;
            println!(
                "Target {} was successfully added to {}",
                args.name.cyan().bold(),
                display_path(&written).bold().green()
            );
        }
    };

    Ok(())
}

fn display_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

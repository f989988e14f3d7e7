use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::render::{render, IndexFormat};
use crate::tree::build_tree;

pub mod content;
pub mod domain;
pub mod render;
pub mod tree;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the directory tree to index
    #[arg(short, long)]
    pub base: PathBuf,

    /// Path of the index file to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format: "md" for a Markdown index, anything else for an org outline
    #[arg(short, long)]
    pub format: String,
}

pub fn build_index(base: &Path, output: &Path, format: &str) -> io::Result<()> {
    println!("Indexing {}...", base.display());

    let root = build_tree(base)?;
    let index = render(&root, IndexFormat::from_selector(format));
    fs::write(output, index)?;

    println!(
        "Wrote {} ({} documents)",
        output.display(),
        root.document_count()
    );

    Ok(())
}

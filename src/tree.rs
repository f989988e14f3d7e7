use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::content::document_title;
use crate::domain::{Directory, Document};

const DOC_EXTENSION: &str = "org";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    Document,
    Other,
}

fn classify(entry: &DirEntry) -> EntryKind {
    if entry.file_type().is_dir() {
        EntryKind::Directory
    } else if entry.path().extension().and_then(|s| s.to_str()) == Some(DOC_EXTENSION) {
        EntryKind::Document
    } else {
        EntryKind::Other
    }
}

/// Scan `base` and assemble the directory tree of its documents.
///
/// Directories only materialize on the path of a discovered document, so
/// branches containing no documents never appear in the result. The sorted
/// walk keeps children ordered by raw entry name, whatever their titles
/// resolve to.
pub fn build_tree(base: &Path) -> io::Result<Directory> {
    let mut root = Directory::new(
        base.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    );

    let walker = WalkDir::new(base)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if classify(&entry) != EntryKind::Document {
            continue;
        }

        let relative = entry.path().strip_prefix(base).map_err(|_e| {
            io::Error::new(io::ErrorKind::Other, "Failed to compute relative path")
        })?;
        let mut parents: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parents.pop(); // the file name itself

        let doc = Document {
            title: document_title(entry.path()),
            path: posix_path(entry.path()),
        };
        subtree(&mut root, &parents).docs.push(doc);
    }

    Ok(root)
}

fn subtree<'a>(node: &'a mut Directory, parents: &[String]) -> &'a mut Directory {
    let Some((name, rest)) = parents.split_first() else {
        return node;
    };
    // Find the index first to avoid overlapping mutable borrows
    let idx = match node.subdirs.iter().position(|d| d.name == *name) {
        Some(i) => i,
        None => {
            node.subdirs.push(Directory::new(name.clone()));
            node.subdirs.len() - 1
        }
    };
    subtree(&mut node.subdirs[idx], rest)
}

fn posix_path(path: &Path) -> String {
    if cfg!(windows) {
        path.to_string_lossy().replace('\\', "/")
    } else {
        path.to_string_lossy().into_owned()
    }
}

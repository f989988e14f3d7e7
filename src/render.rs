use crate::domain::Directory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    Markdown,
    Outline,
}

impl IndexFormat {
    /// "md" selects the Markdown index; every other selector renders the
    /// org outline.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "md" => IndexFormat::Markdown,
            _ => IndexFormat::Outline,
        }
    }
}

pub fn render(root: &Directory, format: IndexFormat) -> String {
    let mut out = String::new();
    if format == IndexFormat::Markdown {
        render_catalog(root, &mut out);
    }
    render_entries(root, format, 0, &mut out);
    out
}

fn render_catalog(root: &Directory, out: &mut String) {
    out.push_str("## Table of contents\n");
    for subdir in &root.subdirs {
        out.push_str(&format!(
            "  + [{}](#{})\n",
            subdir.name,
            subdir.name.to_lowercase()
        ));
    }
}

fn render_entries(node: &Directory, format: IndexFormat, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);

    for subdir in &node.subdirs {
        out.push_str(&match (format, level) {
            (IndexFormat::Markdown, 0) => format!("## {}\n", subdir.name),
            (IndexFormat::Markdown, _) => format!("{indent}+ **{}**\n", subdir.name),
            (IndexFormat::Outline, 0) => format!("* {}\n", subdir.name),
            (IndexFormat::Outline, _) => format!("{indent}+ *{}*\n", subdir.name),
        });
        render_entries(subdir, format, level + 1, out);
    }

    for doc in &node.docs {
        out.push_str(&match format {
            IndexFormat::Markdown => format!("{indent}+ [{}]({})\n", doc.title, doc.path),
            IndexFormat::Outline => format!("{indent}+ [[file:{}][{}]]\n", doc.path, doc.title),
        });
    }
}

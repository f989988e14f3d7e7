#[derive(Debug, Clone)]
pub struct Directory {
    pub name: String,
    pub subdirs: Vec<Directory>,
    pub docs: Vec<Document>,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub path: String,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: name.into(),
            subdirs: Vec::new(),
            docs: Vec::new(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.docs.len()
            + self
                .subdirs
                .iter()
                .map(|d| d.document_count())
                .sum::<usize>()
    }
}

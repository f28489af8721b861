use crate::models::FilesystemTree;

/// Read-only virtual filesystem.
///
/// Built once from the content's [`FilesystemTree`] and never mutated.
///
/// # Path Convention
///
/// - Absolute, `/`-delimited: `"/"`, `"/home"`, `"/home/nguyenpanda"`
/// - No trailing slash except root
/// - A path is a directory iff it is a key of the tree
/// - A child name containing `.` is a file; without `.` it is a directory
///   name, traversable only if its joined path is itself a key
#[derive(Clone, Debug, Default)]
pub struct VirtualFs {
    dirs: FilesystemTree,
}

impl VirtualFs {
    /// Create filesystem from a content tree.
    pub fn new(tree: FilesystemTree) -> Self {
        let entries: usize = tree.values().map(Vec::len).sum();
        log::info!(
            "mounted virtual filesystem: {} directories, {} entries",
            tree.len(),
            entries
        );
        Self { dirs: tree }
    }

    /// Ordered children of a directory, or `None` if `path` is not a directory.
    pub fn list_children(&self, path: &str) -> Option<&[String]> {
        self.dirs.get(path).map(Vec::as_slice)
    }

    /// Whether `path` is a directory key.
    pub fn exists(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    /// Whether `name` is listed directly under `dir`.
    pub fn contains_entry(&self, dir: &str, name: &str) -> bool {
        self.list_children(dir)
            .is_some_and(|children| children.iter().any(|c| c == name))
    }

    /// Entry names with a `.` are files.
    pub fn is_file_name(name: &str) -> bool {
        name.contains('.')
    }

    /// Join a child name onto a directory path (root special-cased).
    pub fn join(dir: &str, name: &str) -> String {
        if dir == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", dir, name)
        }
    }

    /// Parent of a path; root is its own parent.
    ///
    /// Does not consult the tree: `..` always pops exactly one segment.
    pub fn parent(path: &str) -> String {
        let mut parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        parts.pop();
        format!("/{}", parts.join("/"))
    }

    /// Box-drawing tree of everything below `path`, one line per entry.
    ///
    /// Recursion descends only into children whose joined path is a key.
    /// Empty names and names containing `/` are listed but never entered.
    pub fn tree_lines(&self, path: &str) -> Vec<String> {
        let mut lines = Vec::new();
        self.walk(path, "", &mut lines);
        lines
    }

    fn walk(&self, path: &str, prefix: &str, lines: &mut Vec<String>) {
        let Some(children) = self.list_children(path) else {
            return;
        };

        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{}{}{}", prefix, connector, child));

            if child.is_empty() || child.contains('/') {
                continue;
            }
            let child_path = Self::join(path, child);
            if self.exists(&child_path) {
                let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
                self.walk(&child_path, &child_prefix, lines);
            }
        }
    }
}

/*!
 * Core types and data structures for the ReplayFS application
 */

/// Handle to a directory node inside an [`FsTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Index of this node in the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A file discovered in a directory listing
///
/// Immutable once created; files are never removed or renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// A directory in the reconstructed tree
///
/// Children are stored as arena indices in discovery order. The parent link
/// is a non-owning index used only for upward size propagation; ownership of
/// every node lives in the [`FsTree`] arena.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    /// Directory name
    pub name: String,
    /// Files listed directly in this directory
    pub files: Vec<FileEntry>,
    /// Child directories, in the order they were declared
    pub children: Vec<NodeId>,
    /// Owning directory, `None` only for the root
    pub parent: Option<NodeId>,
    /// Cached aggregate: own files plus every descendant
    pub total_size: u64,
}

impl DirectoryNode {
    fn new(name: String, parent: Option<NodeId>) -> Self {
        Self {
            name,
            files: Vec::new(),
            children: Vec::new(),
            parent,
            total_size: 0,
        }
    }
}

/// Arena-backed directory tree rooted at "/"
///
/// The arena owns every node; destruction is a flat `Vec` drop, so the
/// parent back-references never form an ownership cycle.
#[derive(Debug, Clone)]
pub struct FsTree {
    nodes: Vec<DirectoryNode>,
}

impl FsTree {
    /// Create a tree containing only the root directory "/"
    pub fn new() -> Self {
        Self {
            nodes: vec![DirectoryNode::new("/".to_string(), None)],
        }
    }

    /// Handle to the root directory
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow a node by handle
    pub fn node(&self, id: NodeId) -> &DirectoryNode {
        &self.nodes[id.0]
    }

    /// All directories in the tree, in creation order
    pub fn directories(&self) -> &[DirectoryNode] {
        &self.nodes
    }

    /// Iterate over every directory with its handle, in creation order
    ///
    /// Creation order guarantees a parent always precedes its children.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &DirectoryNode)> {
        self.nodes.iter().enumerate().map(|(i, d)| (NodeId(i), d))
    }

    /// Number of directories in the tree (root included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append a new empty child directory under `parent`
    ///
    /// Sibling-name uniqueness is not enforced: a second declaration of the
    /// same name produces a second, distinct node.
    pub fn add_directory(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(DirectoryNode::new(name.to_string(), Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append a file to `dir` and propagate its size to every ancestor
    ///
    /// The walk up the parent chain is iterative, so arbitrarily deep trees
    /// cost no call stack. Every directory's `total_size` is consistent again
    /// by the time this returns.
    pub fn add_file(&mut self, dir: NodeId, name: &str, size: u64) {
        self.nodes[dir.0].files.push(FileEntry {
            name: name.to_string(),
            size,
        });

        let mut current = Some(dir);
        while let Some(id) = current {
            self.nodes[id.0].total_size += size;
            current = self.nodes[id.0].parent;
        }
    }

    /// First child of `dir` named `name`, if any
    pub fn child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[dir.0]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c.0].name == name)
    }
}

impl Default for FsTree {
    fn default() -> Self {
        Self::new()
    }
}

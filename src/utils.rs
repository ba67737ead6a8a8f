/*!
 * Utility functions for ReplayFS
 */

use crate::types::{FsTree, NodeId};

/// Full "/"-rooted path for every directory, in creation order
///
/// Relies on the arena's creation order (parents precede children), so each
/// path is built from its parent's already-computed path in one pass.
pub fn directory_paths(tree: &FsTree) -> Vec<(NodeId, String)> {
    let mut paths: Vec<(NodeId, String)> = Vec::with_capacity(tree.len());

    for (id, dir) in tree.iter() {
        let path = match dir.parent {
            None => "/".to_string(),
            Some(parent) => {
                let (_, parent_path) = &paths[parent.index()];
                if parent_path == "/" {
                    format!("/{}", dir.name)
                } else {
                    format!("{}/{}", parent_path, dir.name)
                }
            }
        };
        paths.push((id, path));
    }

    paths
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

//! Tree nodes decoded from listing entries

use anyhow::Result;
use mirror_github::{ContentEntry, EntryKind, decode_inline_content};
use serde::Serialize;

/// A file entry; `content` holds the decoded inline body when the listing had one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileNode {
    pub name: String,
    pub remote_path: String,
    pub size: u64,
    #[serde(skip)]
    pub content: Option<Vec<u8>>,
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryNode {
    pub name: String,
    pub remote_path: String,
    pub children: Vec<TreeNode>,
}

/// Symlinks, submodules and kinds this tool does not know
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherNode {
    pub name: String,
    pub remote_path: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File(FileNode),
    Directory(DirectoryNode),
    Other(OtherNode),
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File(node) => &node.name,
            TreeNode::Directory(node) => &node.name,
            TreeNode::Other(node) => &node.name,
        }
    }

    pub fn remote_path(&self) -> &str {
        match self {
            TreeNode::File(node) => &node.remote_path,
            TreeNode::Directory(node) => &node.remote_path,
            TreeNode::Other(node) => &node.remote_path,
        }
    }

    /// Number of file nodes in this subtree
    pub fn file_count(&self) -> usize {
        match self {
            TreeNode::File(_) => 1,
            TreeNode::Directory(dir) => dir.children.iter().map(TreeNode::file_count).sum(),
            TreeNode::Other(_) => 0,
        }
    }
}

/// `parent/name`, or just `name` at the repository root
pub fn join_remote_path(parent: &str, name: &str) -> String {
    let parent = parent.trim_end_matches('/');
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Decode one listing entry found under `parent`
///
/// Fails only when the inline body is not valid base64.
pub fn decode_entry(entry: ContentEntry, parent: &str) -> Result<TreeNode> {
    let remote_path = join_remote_path(parent, &entry.name);

    let kind = if entry.is_submodule_link() {
        EntryKind::Submodule
    } else {
        entry.kind
    };

    let node = match kind {
        EntryKind::File => {
            let content = entry.inline_content().map(decode_inline_content).transpose()?;
            TreeNode::File(FileNode {
                name: entry.name,
                remote_path,
                size: entry.size,
                content,
                download_url: entry.download_url,
            })
        }
        EntryKind::Dir => TreeNode::Directory(DirectoryNode {
            name: entry.name,
            remote_path,
            children: Vec::new(),
        }),
        kind => TreeNode::Other(OtherNode {
            name: entry.name,
            remote_path,
            kind,
        }),
    };

    Ok(node)
}

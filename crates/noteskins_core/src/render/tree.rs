//! Folder hierarchy assembly for navigation panels.
//!
//! # Invariants
//! - Siblings are ordered `sort_order ASC, id ASC`.
//! - Every input folder appears exactly once in the output.
//! - Folders whose parent chain is dangling or cyclic are placed at root.

use crate::model::note::{FolderId, NoteFolder};
use crate::source::folder_order;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One folder with its nested children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub folder: NoteFolder,
    pub children: Vec<FolderNode>,
}

/// Builds the folder forest from a flat list.
pub fn build_folder_tree(folders: &[NoteFolder]) -> Vec<FolderNode> {
    let by_id = folders
        .iter()
        .map(|folder| (folder.id, folder))
        .collect::<HashMap<FolderId, &NoteFolder>>();

    let mut children_of: BTreeMap<Option<FolderId>, Vec<&NoteFolder>> = BTreeMap::new();
    for folder in folders {
        let parent = effective_parent(folder, &by_id);
        children_of.entry(parent).or_default().push(folder);
    }
    for siblings in children_of.values_mut() {
        siblings.sort_by(|left, right| folder_order(left, right));
    }

    attach(None, &children_of)
}

fn attach(
    parent: Option<FolderId>,
    children_of: &BTreeMap<Option<FolderId>, Vec<&NoteFolder>>,
) -> Vec<FolderNode> {
    children_of
        .get(&parent)
        .map(|siblings| {
            siblings
                .iter()
                .map(|folder| FolderNode {
                    folder: (*folder).clone(),
                    children: attach(Some(folder.id), children_of),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn effective_parent(
    folder: &NoteFolder,
    by_id: &HashMap<FolderId, &NoteFolder>,
) -> Option<FolderId> {
    let parent = folder.parent_id?;
    if !by_id.contains_key(&parent) {
        return None;
    }

    // Only a cycle through `folder` itself detaches it; a cycle higher up is
    // broken at its own members.
    let mut visited = HashSet::new();
    let mut cursor = Some(parent);
    while let Some(current) = cursor {
        if current == folder.id {
            return None;
        }
        if !visited.insert(current) {
            break;
        }
        cursor = by_id.get(&current).and_then(|node| node.parent_id);
    }
    Some(parent)
}

#[cfg(test)]
mod tests {
    use super::build_folder_tree;
    use crate::model::note::NoteFolder;

    fn folder(name: &str, sort_order: i64) -> NoteFolder {
        NoteFolder::new(None, name, sort_order)
    }

    #[test]
    fn nests_children_in_sort_order() {
        let root = folder("Root", 0);
        let mut late = folder("Late", 5);
        late.parent_id = Some(root.id);
        let mut early = folder("Early", 1);
        early.parent_id = Some(root.id);

        let tree = build_folder_tree(&[late.clone(), root.clone(), early.clone()]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].folder.id, root.id);
        let names = tree[0]
            .children
            .iter()
            .map(|node| node.folder.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[test]
    fn dangling_parent_is_placed_at_root() {
        let mut orphan = folder("Orphan", 0);
        orphan.parent_id = Some(uuid::Uuid::new_v4());
        let tree = build_folder_tree(&[orphan.clone()]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].folder.id, orphan.id);
    }

    #[test]
    fn cycle_is_broken_without_duplicates() {
        let mut a = folder("A", 0);
        let mut b = folder("B", 1);
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let mut child = folder("Child", 0);
        child.parent_id = Some(a.id);

        let tree = build_folder_tree(&[a.clone(), b.clone(), child.clone()]);
        let roots = tree.iter().map(|node| node.folder.id).collect::<Vec<_>>();
        assert_eq!(roots, vec![a.id, b.id]);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].folder.id, child.id);
        assert!(tree[1].children.is_empty());
    }
}

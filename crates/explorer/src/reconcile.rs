use std::collections::HashSet;

use crate::row::{RowKind, TreeRow};
use crate::view::DirectoryView;

/// Counters reported after one reconcile pass.  
/// 單次調和後回報的統計數字。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcilePass {
    /// Directories whose child list was recomputed.
    pub directories: usize,
    /// File rows hidden because a sibling folder shares their base name.
    pub hidden: usize,
}

/// Rewrites the tree reachable from `view` so that file rows shadowed by a
/// same-named sibling folder disappear.  
/// 重寫 `view` 可達的樹，使被同名兄弟資料夾遮蔽的檔案列消失。
///
/// Each directory level is handled independently: a file is hidden only by a
/// folder in the same directory, and a folder is never removed by its own
/// contents. The surviving list is computed in full before the single
/// `set_children` swap, so an abandoned pass never leaves a container
/// half-cleared. Running the pass twice on an unchanged tree is a no-op the
/// second time.
pub fn reconcile(view: &mut dyn DirectoryView) -> ReconcilePass {
    let mut pass = ReconcilePass::default();
    let rows = view.children();
    if lacks_real_entries(&rows) {
        return pass;
    }
    let filtered = filter_directory(rows, &mut pass);
    view.set_children(filtered);
    pass
}

/// A list holding only structural header rows (or nothing) has no
/// reconcilable children.  
/// 僅含結構標題列（或空）的清單沒有可調和的子列。
fn lacks_real_entries(rows: &[TreeRow]) -> bool {
    rows.iter().all(|row| row.kind == RowKind::Header)
}

fn filter_directory(rows: Vec<TreeRow>, pass: &mut ReconcilePass) -> Vec<TreeRow> {
    pass.directories += 1;

    // Children before parent: every folder subtree reaches its final filtered
    // form before this directory's own list is decided.
    let rows: Vec<TreeRow> = rows
        .into_iter()
        .map(|mut row| {
            if row.is_folder() && !lacks_real_entries(&row.entries) {
                let entries = std::mem::take(&mut row.entries);
                row.entries = filter_directory(entries, pass);
            }
            row
        })
        .collect();

    let folder_paths: HashSet<&str> = rows
        .iter()
        .filter(|row| row.is_folder())
        .filter_map(|row| row.path.as_deref())
        .collect();

    let shadowed: Vec<bool> = rows
        .iter()
        .map(|row| match (row.kind, row.path.as_deref()) {
            (RowKind::File, Some(path)) => folder_paths.contains(stem_of(path)),
            // Header rows and rows missing their path pass through untouched.
            _ => false,
        })
        .collect();

    rows.into_iter()
        .zip(shadowed)
        .filter_map(|(row, hide)| {
            if hide {
                pass.hidden += 1;
                None
            } else {
                Some(row)
            }
        })
        .collect()
}

/// Path with the final component's extension stripped, leaving dotfiles and
/// extensionless names unchanged.  
/// 去除最後一段副檔名的路徑；點開頭或無副檔名的名稱維持原樣。
fn stem_of(path: &str) -> &str {
    let name_start = path.rfind('/').map(|idx| idx + 1).unwrap_or(0);
    match path[name_start..].rfind('.') {
        Some(0) | None => path,
        Some(dot) => &path[..name_start + dot],
    }
}

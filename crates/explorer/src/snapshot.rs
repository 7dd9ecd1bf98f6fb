use crate::row::TreeRow;
use crate::view::DirectoryView;

/// Pristine copy of a root view's children, captured before the first filter
/// pass of an activation cycle.  
/// 啟用週期內第一次過濾前擷取的根檢視原始子列複本。
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    rows: Vec<TreeRow>,
}

impl TreeSnapshot {
    /// Deep-copies the view's current ordered child list. Later mutation of
    /// the view leaves the snapshot untouched.  
    /// 深層複製檢視目前的有序子列；之後對檢視的修改不影響快照。
    pub fn capture(view: &dyn DirectoryView) -> Self {
        Self {
            rows: view.children(),
        }
    }

    /// Replaces every child in `view` with fresh copies from the snapshot,
    /// in snapshot order. Idempotent.  
    /// 以快照內容的新複本完整取代檢視的子列，順序依快照為準；可重複執行。
    pub fn restore(&self, view: &mut dyn DirectoryView) {
        view.set_children(self.rows.clone());
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use crate::row::TreeRow;

/// The rendered, ordered child list shown under a container row.  
/// 容器列底下實際呈現的有序子列清單。
///
/// The concrete view is owned by the host rendering layer. Consumers may read
/// the children and replace them wholesale, never allocate or tear down the
/// view itself. Replacement is a full clear-then-rebuild swap so a pass never
/// leaves a container partially cleared.
pub trait DirectoryView {
    /// Deep copies of the current child rows, in render order.  
    /// 目前子列的深層複本，依呈現順序排列。
    fn children(&self) -> Vec<TreeRow>;

    /// Clears the current children and re-inserts the given rows.  
    /// 清空現有子列並重新插入指定的列。
    fn set_children(&mut self, rows: Vec<TreeRow>);
}

/// In-memory [`DirectoryView`] backend for tests and headless embedding.  
/// 供測試與無介面嵌入使用的記憶體內 [`DirectoryView`] 後端。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryView {
    rows: Vec<TreeRow>,
}

impl MemoryView {
    pub fn new(rows: Vec<TreeRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }
}

impl DirectoryView for MemoryView {
    fn children(&self) -> Vec<TreeRow> {
        self.rows.clone()
    }

    fn set_children(&mut self, rows: Vec<TreeRow>) {
        self.rows = rows;
    }
}

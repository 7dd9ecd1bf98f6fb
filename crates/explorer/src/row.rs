use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle standing in for the renderable object behind an explorer row.  
/// 代表資源管理器列背後可繪製物件的不透明代號。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowId(u64);

impl RowId {
    pub fn new() -> Self {
        Self(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// The kind of explorer row.  
/// 資源管理器列的類型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Folder,
    File,
    /// Structural row injected by the host, e.g. a folder's self-label row.  
    /// 由宿主插入的結構列，例如資料夾自身的標題列。
    Header,
}

/// One row in the file/folder navigation view.  
/// 檔案／資料夾導覽檢視中的單一列。
///
/// `path` is the vault-relative path as the host reports it, with no
/// extension tagging applied; `None` marks a structurally malformed row that
/// must pass through reconciliation untouched. `entries` is the nested child
/// list shown one level beneath a folder's self-row.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub id: RowId,
    pub kind: RowKind,
    pub path: Option<String>,
    pub entries: Vec<TreeRow>,
}

impl TreeRow {
    /// Builds a folder row with the given nested entry list.  
    /// 以指定的子列清單建立資料夾列。
    pub fn folder(path: impl Into<String>, entries: Vec<TreeRow>) -> Self {
        Self {
            id: RowId::new(),
            kind: RowKind::Folder,
            path: Some(path.into()),
            entries,
        }
    }

    /// Builds a file row.  
    /// 建立檔案列。
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            id: RowId::new(),
            kind: RowKind::File,
            path: Some(path.into()),
            entries: Vec::new(),
        }
    }

    /// Builds a structural header row.  
    /// 建立結構性的標題列。
    pub fn header() -> Self {
        Self {
            id: RowId::new(),
            kind: RowKind::Header,
            path: None,
            entries: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == RowKind::Folder
    }

    pub fn is_file(&self) -> bool {
        self.kind == RowKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_ids_are_unique_and_survive_clone() {
        let a = TreeRow::file("Notes.md");
        let b = TreeRow::file("Notes.md");
        assert_ne!(a.id, b.id);

        let copy = a.clone();
        assert_eq!(copy.id, a.id);
        assert_eq!(copy.path.as_deref(), Some("Notes.md"));
    }

    #[test]
    fn constructors_set_expected_kinds() {
        assert!(TreeRow::folder("Notes", Vec::new()).is_folder());
        assert!(TreeRow::file("Notes.md").is_file());
        let header = TreeRow::header();
        assert_eq!(header.kind, RowKind::Header);
        assert!(header.path.is_none());
    }
}

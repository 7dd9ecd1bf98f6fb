//! Explorer-tree primitives for NoteFold: the row model, the directory-view
//! abstraction, the shadowing reconciler and the pristine-tree snapshot.
//! NoteFold 的資源管理器樹核心：列模型、目錄檢視抽象、遮蔽調和器與原始樹快照。

pub mod reconcile;
pub mod row;
pub mod snapshot;
pub mod view;

pub use reconcile::{reconcile, ReconcilePass};
pub use row::{RowId, RowKind, TreeRow};
pub use snapshot::TreeSnapshot;
pub use view::{DirectoryView, MemoryView};

//! Host-integration shim for NoteFold: trigger plumbing, the filter-session
//! state machine, the root-view locator and the status surface.
//! NoteFold 的宿主整合層：觸發管線、過濾狀態機、根檢視定位器與狀態列。

pub mod controller;
pub mod host;
pub mod locator;
pub mod session;
pub mod trigger;

pub use controller::FilterController;
pub use host::{ExplorerHost, MemoryHost, MemoryStatus, StatusSink};
pub use locator::{RenderContainer, ViewLocator};
pub use session::{FilterSession, FilterState, PassOutcome, SkipReason};
pub use trigger::{RefreshClock, UpdateTrigger, VaultEventKind, DEFAULT_REFRESH_INTERVAL};

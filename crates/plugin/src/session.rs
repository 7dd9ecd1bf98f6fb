use notefold_explorer::{reconcile, DirectoryView, TreeSnapshot};

use crate::trigger::UpdateTrigger;

/// Filter toggle states for one plugin session.  
/// 單一外掛工作階段的過濾狀態。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    Filtered,
}

/// Why a pass ended without touching the tree.  
/// 此次觸發未更動樹狀結構的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Root view not resolvable yet; deferred to the next trigger.
    ViewNotReady,
    /// Flag off with no snapshot held; the tree is left as-is.
    NoSnapshot,
}

/// Result of a single pass, consumed by the status surface.  
/// 單次處理的結果，供狀態列顯示使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Filtered { hidden: usize, directories: usize },
    Restored,
    Skipped(SkipReason),
}

/// Explicit per-session state: the toggle state machine plus the pristine
/// snapshot. Created on plugin activation and dropped on deactivation, so no
/// state outlives a session.  
/// 工作階段專屬的狀態物件：切換狀態機與原始快照。隨外掛啟用建立、停用時丟棄。
///
/// A structural vault event marks the held snapshot stale; the next pass
/// re-captures before filtering. This relies on the host re-rendering the
/// explorer from the vault before it notifies listeners, so the live list at
/// event time is pristine.
#[derive(Debug, Default)]
pub struct FilterSession {
    state: FilterState,
    snapshot: Option<TreeSnapshot>,
    snapshot_stale: bool,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Runs one pass for the given trigger. `view` is `None` while the host
    /// UI is not laid out; `hide` is the current value of the settings flag.  
    /// 針對單次觸發執行一次處理；宿主介面尚未就緒時 `view` 為 `None`。
    pub fn apply(
        &mut self,
        trigger: UpdateTrigger,
        view: Option<&mut dyn DirectoryView>,
        hide: bool,
    ) -> PassOutcome {
        if let UpdateTrigger::Vault(event) = trigger {
            if event.is_structural() && self.state == FilterState::Filtered {
                self.snapshot_stale = true;
            }
        }

        let Some(view) = view else {
            return PassOutcome::Skipped(SkipReason::ViewNotReady);
        };

        if hide {
            if self.snapshot.is_none() || self.snapshot_stale {
                self.snapshot = Some(TreeSnapshot::capture(&*view));
                self.snapshot_stale = false;
            }
            let pass = reconcile(view);
            self.state = FilterState::Filtered;
            PassOutcome::Filtered {
                hidden: pass.hidden,
                directories: pass.directories,
            }
        } else {
            match self.snapshot.take() {
                Some(snapshot) => {
                    snapshot.restore(view);
                    self.state = FilterState::Unfiltered;
                    self.snapshot_stale = false;
                    PassOutcome::Restored
                }
                None => PassOutcome::Skipped(SkipReason::NoSnapshot),
            }
        }
    }
}

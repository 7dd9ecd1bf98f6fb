use std::time::{Duration, Instant};

/// Default cadence of the periodic re-synchronization tick.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Vault change notification. Payloads carry no guarantees beyond "something
/// changed", so every kind funnels into the same filter pass.  
/// 資料庫變更通知；內容不保證細節，所有種類都觸發同一次過濾。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultEventKind {
    Create,
    Modify,
    Delete,
    Rename,
}

impl VaultEventKind {
    /// Whether the event can add or remove tree rows, which makes a held
    /// pristine snapshot stale.  
    /// 此事件是否可能增刪樹列，使既有的原始快照失效。
    pub fn is_structural(&self) -> bool {
        !matches!(self, VaultEventKind::Modify)
    }
}

/// External causes for a filter pass.  
/// 觸發過濾的外部原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTrigger {
    Vault(VaultEventKind),
    Command,
    Tick,
}

/// Fixed-interval gate for the periodic tick. The host drives the clock; the
/// gate only answers whether a pass is due yet.  
/// 週期性觸發的固定間隔閘門；時間由宿主推進，閘門僅判斷是否到期。
#[derive(Debug)]
pub struct RefreshClock {
    interval: Duration,
    last: Option<Instant>,
}

impl RefreshClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns `true` (and arms the next window) when the interval elapsed
    /// since the last accepted tick. The first call is always due.  
    /// 距上次通過的觸發已滿間隔時回傳 `true` 並重新計時；第一次呼叫必定到期。
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last {
            Some(prev) if now.duration_since(prev) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

impl Default for RefreshClock {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

use std::time::Instant;

use notefold_settings::ExplorerSettings;

use crate::host::ExplorerHost;
use crate::session::{FilterSession, FilterState, PassOutcome};
use crate::trigger::{RefreshClock, UpdateTrigger};

/// Drives one filter pass per trigger: resolves the root view through the
/// host, steps the session state machine and refreshes the status surface.  
/// 每次觸發執行一次過濾：透過宿主取得根檢視、推進狀態機並更新狀態列。
#[derive(Debug)]
pub struct FilterController {
    session: FilterSession,
    clock: RefreshClock,
}

impl FilterController {
    pub fn new() -> Self {
        Self {
            session: FilterSession::new(),
            clock: RefreshClock::default(),
        }
    }

    pub fn with_clock(clock: RefreshClock) -> Self {
        Self {
            session: FilterSession::new(),
            clock,
        }
    }

    pub fn session(&self) -> &FilterSession {
        &self.session
    }

    /// Entry point for every external trigger: vault events, the user
    /// command, and accepted ticks.  
    /// 所有外部觸發的進入點：資料庫事件、使用者指令與通過的週期觸發。
    pub fn handle(
        &mut self,
        trigger: UpdateTrigger,
        host: &mut dyn ExplorerHost,
        settings: &ExplorerSettings,
    ) -> PassOutcome {
        let outcome = self
            .session
            .apply(trigger, host.root_view(), settings.hide_shadowed_files);
        let line = status_line(settings, self.session.state(), outcome);
        host.status().set_text(&line);
        outcome
    }

    /// Periodic entry; runs a pass only when the refresh interval elapsed.  
    /// 週期性進入點；僅在刷新間隔已滿時執行。
    pub fn tick(
        &mut self,
        now: Instant,
        host: &mut dyn ExplorerHost,
        settings: &ExplorerSettings,
    ) -> Option<PassOutcome> {
        if !self.clock.due(now) {
            return None;
        }
        Some(self.handle(UpdateTrigger::Tick, host, settings))
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}

fn status_line(settings: &ExplorerSettings, state: FilterState, outcome: PassOutcome) -> String {
    if !settings.show_status_bar {
        return String::new();
    }
    match outcome {
        PassOutcome::Filtered { hidden, .. } => format!("Shadowed files: {hidden} hidden"),
        PassOutcome::Restored => "Shadowed files: off".to_string(),
        PassOutcome::Skipped(_) => match state {
            FilterState::Filtered => "Shadowed files: on".to_string(),
            FilterState::Unfiltered => "Shadowed files: off".to_string(),
        },
    }
}

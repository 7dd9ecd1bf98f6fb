use notefold_explorer::{DirectoryView, MemoryView};

/// Single text-settable surface the plugin writes its status line to.  
/// 外掛寫入狀態文字的單一介面。
pub trait StatusSink {
    fn set_text(&mut self, text: &str);
}

/// The slice of the host workspace the plugin consumes: the explorer's root
/// directory view plus the status surface.  
/// 外掛所需的宿主工作區介面：資源管理器根檢視與狀態列。
pub trait ExplorerHost {
    /// Root directory view of the explorer, or `None` while the host UI is
    /// not laid out yet.  
    /// 資源管理器的根目錄檢視；宿主介面尚未就緒時為 `None`。
    fn root_view(&mut self) -> Option<&mut dyn DirectoryView>;

    fn status(&mut self) -> &mut dyn StatusSink;
}

/// [`StatusSink`] backed by a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStatus {
    text: String,
}

impl MemoryStatus {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusSink for MemoryStatus {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// In-memory [`ExplorerHost`] for tests and headless embedding.  
/// 供測試與無介面嵌入使用的記憶體內 [`ExplorerHost`]。
#[derive(Debug, Default)]
pub struct MemoryHost {
    view: Option<MemoryView>,
    status: MemoryStatus,
}

impl MemoryHost {
    pub fn new(view: MemoryView) -> Self {
        Self {
            view: Some(view),
            status: MemoryStatus::default(),
        }
    }

    /// Host whose explorer leaf has not been laid out yet.  
    /// 模擬資源管理器尚未就緒的宿主。
    pub fn not_laid_out() -> Self {
        Self::default()
    }

    pub fn attach_view(&mut self, view: MemoryView) {
        self.view = Some(view);
    }

    pub fn view(&self) -> Option<&MemoryView> {
        self.view.as_ref()
    }

    pub fn status_text(&self) -> &str {
        self.status.text()
    }
}

impl ExplorerHost for MemoryHost {
    fn root_view(&mut self) -> Option<&mut dyn DirectoryView> {
        self.view
            .as_mut()
            .map(|view| view as &mut dyn DirectoryView)
    }

    fn status(&mut self) -> &mut dyn StatusSink {
        &mut self.status
    }
}

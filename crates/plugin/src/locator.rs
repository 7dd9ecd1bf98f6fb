use notefold_explorer::DirectoryView;

/// A nested render container the locator can descend through. Implemented by
/// the concrete host over whatever its rendering layer nests views in.  
/// 定位器可逐層下探的巢狀繪製容器，由實際宿主針對其繪製層實作。
pub trait RenderContainer {
    fn child_at(&mut self, index: usize) -> Option<&mut dyn RenderContainer>;

    /// The directory view this container fronts, if it is one.  
    /// 此容器對應的目錄檢視（若有）。
    fn as_directory_view(&mut self) -> Option<&mut dyn DirectoryView>;
}

/// Fixed child-index descent from the explorer leaf container to the root
/// directory view. The chain is coupled to host UI internals that shift
/// between host versions, so it lives here as one configurable value instead
/// of scattered lookups.  
/// 從資源管理器葉節點容器下探到根目錄檢視的固定子索引鏈。該鏈與宿主介面內部  
/// 結構耦合，集中於此以便隨宿主版本調整。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLocator {
    descent: Vec<usize>,
}

impl ViewLocator {
    pub fn new(descent: Vec<usize>) -> Self {
        Self { descent }
    }

    pub fn descent(&self) -> &[usize] {
        &self.descent
    }

    /// Walks the descent chain and returns the root view, or `None` when any
    /// step is missing (host UI not ready).  
    /// 依索引鏈下探並回傳根檢視；任一層缺漏（介面尚未就緒）時回傳 `None`。
    pub fn resolve<'a>(
        &self,
        container: &'a mut dyn RenderContainer,
    ) -> Option<&'a mut dyn DirectoryView> {
        let mut current = container;
        for &index in &self.descent {
            current = current.child_at(index)?;
        }
        current.as_directory_view()
    }
}

impl Default for ViewLocator {
    fn default() -> Self {
        // Observed layout of current host builds.
        Self::new(vec![1, 1, 0, 1])
    }
}

use crate::core::models::NormalizedScheduleBlock;
use crate::grid::placement::WeeklyGrid;
use std::fmt;

pub type SelectHook<'a> = Box<dyn FnMut(&NormalizedScheduleBlock) + 'a>;

/// Which block the user last clicked, owned by the display layer.
///
/// Two states: nothing selected, or one block (by input position). The grid
/// only ever reads this for highlighting.
#[derive(Default)]
pub struct Selection<'a> {
    selected: Option<usize>,
    on_block_selected: Option<SelectHook<'a>>,
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook receiving every clicked block unchanged.
    pub fn with_hook(mut self, hook: impl FnMut(&NormalizedScheduleBlock) + 'a) -> Self {
        self.on_block_selected = Some(Box::new(hook));
        self
    }

    pub fn click(&mut self, block: &NormalizedScheduleBlock) {
        self.selected = Some(block.position);
        if let Some(hook) = self.on_block_selected.as_mut() {
            hook(block);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, block: &NormalizedScheduleBlock) -> bool {
        self.selected == Some(block.position)
    }

    pub fn selected_block<'g>(&self, grid: &'g WeeklyGrid) -> Option<&'g NormalizedScheduleBlock> {
        self.selected.and_then(|position| grid.block_at(position))
    }
}

impl fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.selected)
            .field("has_hook", &self.on_block_selected.is_some())
            .finish()
    }
}

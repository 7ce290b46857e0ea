use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::model::LaunchTable;
use crate::layout::PageLayout;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the request handlers read. Built once at startup and never
/// mutated, so cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded launch table.
    pub table: Arc<LaunchTable>,

    /// Booster category colours, fixed over the whole table.
    pub colors: Arc<ColorMap>,

    /// Page description served to the browser.
    pub layout: Arc<PageLayout>,
}

impl AppState {
    /// Derive colours and layout from a freshly loaded table.
    pub fn new(table: LaunchTable) -> Self {
        let colors = ColorMap::new(table.booster_categories());
        let layout = PageLayout::for_table(&table);

        Self {
            table: Arc::new(table),
            colors: Arc::new(colors),
            layout: Arc::new(layout),
        }
    }
}

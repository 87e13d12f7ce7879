//! Sidebar components — search history panel and session list.

mod search_history;
mod sidebar_list;

pub use search_history::SearchHistory;
#[allow(unused_imports)]
pub use sidebar_list::SidebarList;

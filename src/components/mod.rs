//! View components

mod rich_body;
pub mod sidebar;

pub use rich_body::RichBody;
pub use sidebar::{Affordance, BackTarget, SideBarMode, SidebarView};

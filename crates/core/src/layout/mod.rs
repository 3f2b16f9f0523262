//! Page structure: tabs, sub-tabs and the static UI tree.

pub mod error;
pub mod tabs;
pub mod tree;

pub use error::LayoutError;
pub use tabs::{FormField, SubTab, Tab, TabContent, render_content, resolve};
pub use tree::PageLayout;

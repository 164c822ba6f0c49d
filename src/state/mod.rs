// UI state module.
// Declarative theme, sidebar and scroll-indicator state driving page styling.

pub mod scroll;
pub mod sidebar;
pub mod theme;

pub use scroll::{indicator_width, scroll_percent};
pub use sidebar::{DEFAULT_SIDEBAR_WIDTH, SidebarState};
pub use theme::{THEME_KEY, Theme, ThemeRole};

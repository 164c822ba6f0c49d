// Sidebar state.
// Open/closed flag and the width it resolves to.

/// Default width of the open sidebar in pixels.
pub const DEFAULT_SIDEBAR_WIDTH: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        *self == SidebarState::Open
    }

    pub fn toggled(&self) -> Self {
        match self {
            SidebarState::Closed => SidebarState::Open,
            SidebarState::Open => SidebarState::Closed,
        }
    }

    /// Width in pixels for the given open width.
    pub fn width(&self, open_width: u32) -> u32 {
        match self {
            SidebarState::Open => open_width,
            SidebarState::Closed => 0,
        }
    }

    /// CSS width declaration, e.g. `250px`.
    pub fn css_width(&self, open_width: u32) -> String {
        format!("{}px", self.width(open_width))
    }
}

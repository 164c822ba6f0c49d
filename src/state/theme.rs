// Theme state.
// Light/dark preference persisted in the store and the style classes it selects.

use tracing::warn;

use crate::cache::Store;
use crate::error::Result;

/// Store key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Colour theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Styled surface whose class depends on the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRole {
    Background,
    SecondaryBackground,
    Foreground,
    Border,
    Hover,
    Highlight,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 6] = [
        ThemeRole::Background,
        ThemeRole::SecondaryBackground,
        ThemeRole::Foreground,
        ThemeRole::Border,
        ThemeRole::Hover,
        ThemeRole::Highlight,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            ThemeRole::Background => "bg",
            ThemeRole::SecondaryBackground => "secondary-bg",
            ThemeRole::Foreground => "fg",
            ThemeRole::Border => "border",
            ThemeRole::Hover => "hover",
            ThemeRole::Highlight => "highlight",
        }
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference. Anything unrecognised means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class for `role`, e.g. `dark-secondary-bg`.
    pub fn class(&self, role: ThemeRole) -> String {
        format!("{}-{}", self.as_str(), role.suffix())
    }

    /// Classes for every role, in `ThemeRole::ALL` order.
    pub fn classes(&self) -> Vec<String> {
        ThemeRole::ALL.iter().map(|role| self.class(*role)).collect()
    }

    /// Icon file marker used in image sources for this theme.
    pub fn icon_marker(&self) -> &'static str {
        match self {
            Theme::Light => "icon-light",
            Theme::Dark => "icon-dark",
        }
    }

    /// Point an icon source at this theme's variant.
    pub fn icon_src(&self, src: &str) -> String {
        src.replace(self.toggled().icon_marker(), self.icon_marker())
    }

    /// Load the persisted preference. Read failures fall back to light.
    pub fn load(store: &dyn Store) -> Self {
        match store.get_item(THEME_KEY) {
            Ok(value) => Self::from_stored(value.as_deref()),
            Err(e) => {
                warn!("could not read theme preference: {}", e);
                Theme::Light
            }
        }
    }

    pub fn save(&self, store: &dyn Store) -> Result<()> {
        store.set_item(THEME_KEY, self.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    }

    #[test]
    fn test_classes() {
        assert_eq!(Theme::Light.class(ThemeRole::Background), "light-bg");
        assert_eq!(
            Theme::Dark.class(ThemeRole::SecondaryBackground),
            "dark-secondary-bg"
        );
        let classes = Theme::Dark.classes();
        assert_eq!(classes.len(), ThemeRole::ALL.len());
        assert!(classes.iter().all(|c| c.starts_with("dark-")));
    }

    #[test]
    fn test_icon_src() {
        assert_eq!(
            Theme::Dark.icon_src("/img/github-icon-light.svg"),
            "/img/github-icon-dark.svg"
        );
        assert_eq!(
            Theme::Light.icon_src("/img/github-icon-dark.svg"),
            "/img/github-icon-light.svg"
        );
        assert_eq!(Theme::Light.icon_src("/img/logo.png"), "/img/logo.png");
    }

    #[test]
    fn test_load_and_save() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);

        Theme::Dark.save(&store).unwrap();
        assert_eq!(store.get_item(THEME_KEY).unwrap(), Some("dark".to_string()));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }
}

//! Bottom navigation of the mobile preview: the editor's tool switcher.

use serde::Serialize;
use std::fmt;

/// Editor tool reachable from the bottom navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditorTool {
    /// Page background
    Background,
    /// Fonts
    Typography,
    /// Product card styling
    #[default]
    CardStyling,
    /// Social links
    Socials,
    /// Profile header and avatar
    Profile,
}

impl EditorTool {
    /// Tools in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Background,
        Self::Typography,
        Self::CardStyling,
        Self::Socials,
        Self::Profile,
    ];

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Background => "Fondo",
            Self::Typography => "Fuentes",
            Self::CardStyling => "Tarjetas",
            Self::Socials => "Redes",
            Self::Profile => "Perfil",
        }
    }

    /// Tool at a 1-based navigation slot (number keys).
    #[must_use]
    pub fn from_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for EditorTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation bar state: exactly one active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BottomNav {
    active: EditorTool,
}

impl BottomNav {
    /// Active tool.
    #[must_use]
    pub const fn active(&self) -> EditorTool {
        self.active
    }

    /// Makes `tool` the active one.
    pub fn select(&mut self, tool: EditorTool) {
        self.active = tool;
    }

    /// `(tool, is_active)` for every slot, in order.
    pub fn items(&self) -> impl Iterator<Item = (EditorTool, bool)> + '_ {
        EditorTool::ALL.into_iter().map(move |t| (t, t == self.active))
    }
}

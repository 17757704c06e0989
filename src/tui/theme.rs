//! Editor chrome colors for dark and light terminals.
//!
//! The chrome follows the OS theme (or the configured override); the store
//! preview itself is painted with the storefront's own colors on top of
//! [`Theme::page`].

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::RgbColor;

/// Chrome palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Panel borders and the preview frame
    pub primary: Color,
    /// Focused control, pressed variant buttons, key hints
    pub accent: Color,
    /// Switch knob when on
    pub success: Color,
    /// Error prefix and invalid hex entry
    pub error: Color,

    pub text: Color,
    /// Unfocused control labels, focus description
    pub text_secondary: Color,
    /// Empty slider cells, hint actions, scrollbar
    pub text_muted: Color,

    pub background: Color,
    /// Row behind the focused control
    pub highlight_bg: Color,
    /// Bottom navigation strip and popups
    pub surface: Color,
    /// Storefront page behind the product cards; blended with card opacity
    pub page: RgbColor,
    /// Strip drawn under cards with a shadow
    pub shadow: Color,
}

impl Theme {
    /// Palette matching the OS appearance. Unknown appearance reads as dark.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Palette for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
            page: RgbColor::new(24, 24, 27),
            shadow: Color::Rgb(8, 8, 8),
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
            page: RgbColor::new(243, 244, 246),
            shadow: Color::Rgb(170, 170, 170),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_shadow_darker_than_page() {
        for theme in [Theme::dark(), Theme::light()] {
            let Color::Rgb(r, _, _) = theme.shadow else {
                panic!("shadow should be an RGB color");
            };
            assert!(r < theme.page.r);
        }
    }

    #[test]
    fn test_white_card_visible_on_dark_page() {
        let theme = Theme::dark();
        let half = RgbColor::WHITE.blend_over(theme.page, 0.5);
        assert!(half.r > theme.page.r);
        assert!(half.r < 255);
    }
}

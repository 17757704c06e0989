//! Pure mapping from a [`StyleModel`] to concrete visual attributes.
//!
//! `render` has no side effects and no clock or I/O dependency, so equal
//! models always render to equal attributes and snapshots can be compared
//! byte for byte.

use serde::Serialize;

use crate::models::{AvatarShape, CardRadius, RgbColor, StyleModel};

/// Corner radius for [`CardRadius::Square`].
pub const RADIUS_SQUARE_PX: u16 = 0;
/// Corner radius for [`CardRadius::Rounded`].
pub const RADIUS_ROUNDED_PX: u16 = 16;
/// Corner radius for [`CardRadius::Pill`]; the maximum rounding.
pub const RADIUS_MAX_PX: u16 = 32;

/// Box shadow applied to cards when the shadow flag is on.
pub const CARD_SHADOW: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";

/// Concrete attributes of one product card container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAttributes {
    /// Opacity fraction
    pub opacity: f64,
    /// Opacity as a whole percentage
    pub opacity_percent: u8,
    /// Corner radius in pixels
    pub border_radius_px: u16,
    /// Box shadow, absent when disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<&'static str>,
    /// Background color
    pub background: RgbColor,
}

impl CardAttributes {
    /// CSS declaration block for the card container.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity: {}; border-radius: {}px; background-color: {};",
            self.opacity, self.border_radius_px, self.background
        );
        if let Some(shadow) = self.box_shadow {
            css.push_str(" box-shadow: ");
            css.push_str(shadow);
            css.push(';');
        }
        css
    }
}

/// Concrete attributes of the avatar container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarAttributes {
    /// Shape rendered
    pub shape: AvatarShape,
    /// CSS border radius
    pub border_radius: &'static str,
}

impl AvatarAttributes {
    /// CSS declaration block for the avatar container.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("border-radius: {};", self.border_radius)
    }
}

/// Concrete attributes of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextAttributes {
    /// Foreground color
    pub color: RgbColor,
}

impl TextAttributes {
    /// CSS declaration block for the text node.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("color: {};", self.color)
    }
}

/// Every attribute the preview consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualAttributes {
    /// Product card container
    pub card: CardAttributes,
    /// Avatar container
    pub avatar: AvatarAttributes,
    /// Product title text
    pub title: TextAttributes,
    /// Product price text
    pub price: TextAttributes,
    /// Theme accent (color picker swatch, buttons)
    pub accent: RgbColor,
}

/// Corner radius in pixels for a radius variant.
#[must_use]
pub const fn radius_px(radius: CardRadius) -> u16 {
    match radius {
        CardRadius::Square => RADIUS_SQUARE_PX,
        CardRadius::Rounded => RADIUS_ROUNDED_PX,
        CardRadius::Pill => RADIUS_MAX_PX,
    }
}

/// Renders `model` into visual attributes. Total over every valid model.
#[must_use]
pub fn render(model: &StyleModel) -> VisualAttributes {
    VisualAttributes {
        card: CardAttributes {
            opacity: model.card_opacity(),
            opacity_percent: model.opacity_percent(),
            border_radius_px: radius_px(model.card_radius()),
            box_shadow: model.card_shadow().then_some(CARD_SHADOW),
            background: model.card_background(),
        },
        avatar: AvatarAttributes {
            shape: model.avatar_shape(),
            border_radius: match model.avatar_shape() {
                AvatarShape::Circle => "50%",
                AvatarShape::Square => "0",
            },
        },
        title: TextAttributes {
            color: model.title_color(),
        },
        price: TextAttributes {
            color: model.price_color(),
        },
        accent: model.theme_color(),
    }
}

//! The validated style model for one storefront's visual presentation.
//!
//! A [`StyleModel`] is never mutated in place: [`StyleModel::apply`] validates a
//! [`PartialUpdate`] and returns a new model. Numeric fields are clamped into
//! range, enum and color fields are either valid or the whole update is
//! rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{StyleError, StyleResult};
use crate::models::RgbColor;

/// Lower bound of the card opacity.
pub const OPACITY_MIN: f64 = 0.0;
/// Upper bound of the card opacity.
pub const OPACITY_MAX: f64 = 1.0;

/// Opacity values are stored rounded to this many steps per unit so that
/// repeated step arithmetic lands on exact decimals.
const OPACITY_QUANTUM: f64 = 1_000_000.0;

/// Legacy pixel radius at which a card counts as a pill.
const PILL_THRESHOLD_PX: u32 = 24;

/// Corner style of product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardRadius {
    /// No rounding
    #[default]
    Square,
    /// Medium rounding
    Rounded,
    /// Maximum rounding
    Pill,
}

impl CardRadius {
    /// All variants in display order.
    pub const ALL: [Self; 3] = [Self::Square, Self::Rounded, Self::Pill];

    /// Stable lowercase name used in snapshots.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rounded => "rounded",
            Self::Pill => "pill",
        }
    }

    /// Human label shown on the selector button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Rounded => "Rounded",
            Self::Pill => "Pill",
        }
    }

    /// Maps a legacy pixel radius onto a variant.
    ///
    /// `0` is square, anything below 24px is rounded, 24px and up is a pill.
    #[must_use]
    pub const fn from_px(px: u32) -> Self {
        if px == 0 {
            Self::Square
        } else if px < PILL_THRESHOLD_PX {
            Self::Rounded
        } else {
            Self::Pill
        }
    }
}

impl FromStr for CardRadius {
    type Err = StyleError;

    fn from_str(s: &str) -> StyleResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StyleError::invalid_variant(EnumField::CardRadius, s))
    }
}

/// Shape of the storefront avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    /// Round avatar
    #[default]
    Circle,
    /// Square avatar
    Square,
}

impl AvatarShape {
    /// All variants in display order.
    pub const ALL: [Self; 2] = [Self::Circle, Self::Square];

    /// Stable lowercase name used in snapshots.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    /// Human label shown on the selector button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
        }
    }
}

impl FromStr for AvatarShape {
    type Err = StyleError;

    fn from_str(s: &str) -> StyleResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StyleError::invalid_variant(EnumField::AvatarShape, s))
    }
}

/// Enum-valued fields of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumField {
    /// `cardRadius`
    CardRadius,
    /// `avatarShape`
    AvatarShape,
}

impl EnumField {
    /// Declared variant names for this field.
    #[must_use]
    pub const fn variants(self) -> &'static [&'static str] {
        match self {
            Self::CardRadius => &["square", "rounded", "pill"],
            Self::AvatarShape => &["circle", "square"],
        }
    }

    /// Display labels, parallel to [`Self::variants`].
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::CardRadius => &["Square", "Rounded", "Pill"],
            Self::AvatarShape => &["Circle", "Square"],
        }
    }
}

impl fmt::Display for EnumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardRadius => write!(f, "cardRadius"),
            Self::AvatarShape => write!(f, "avatarShape"),
        }
    }
}

/// Boolean fields of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolField {
    /// `cardShadow`
    CardShadow,
}

impl fmt::Display for BoolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardShadow => write!(f, "cardShadow"),
        }
    }
}

/// Color fields of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    /// `themeColor`
    Theme,
    /// `titleColor`
    Title,
    /// `priceColor`
    Price,
    /// `cardBackground`
    CardBackground,
}

impl ColorField {
    /// All color fields.
    pub const ALL: [Self; 4] = [Self::Theme, Self::Title, Self::Price, Self::CardBackground];

    /// Parses a field name as used on the command line (`theme`, `title`,
    /// `price`, `card-background`) or in snapshots (`themeColor`, ...).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "theme" | "themecolor" => Some(Self::Theme),
            "title" | "titlecolor" => Some(Self::Title),
            "price" | "pricecolor" => Some(Self::Price),
            "card-background" | "background" | "cardbackground" => Some(Self::CardBackground),
            _ => None,
        }
    }
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme => write!(f, "themeColor"),
            Self::Title => write!(f, "titleColor"),
            Self::Price => write!(f, "priceColor"),
            Self::CardBackground => write!(f, "cardBackground"),
        }
    }
}

/// Unvalidated color as received from a host: hex string or channel triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    /// `"#RRGGBB"`
    Hex(String),
    /// `[r, g, b]`, each expected in 0-255
    Channels([i64; 3]),
}

impl RawColor {
    /// Validates into an [`RgbColor`] for `field`. Out-of-range channels are
    /// rejected, not clamped.
    pub fn resolve(&self, field: ColorField) -> StyleResult<RgbColor> {
        let parsed = match self {
            Self::Hex(hex) => RgbColor::from_hex(hex),
            Self::Channels(channels) => RgbColor::try_from_channels(*channels),
        };
        parsed.map_err(|e| StyleError::invalid_color(field, format!("{e:#}")))
    }
}

impl From<RgbColor> for RawColor {
    fn from(color: RgbColor) -> Self {
        Self::Hex(color.to_hex())
    }
}

/// Unvalidated card radius: variant name or legacy pixel value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRadius {
    /// Variant name (`"pill"`)
    Named(String),
    /// Legacy pixel radius
    Pixels(u32),
}

impl RawRadius {
    fn resolve(&self) -> StyleResult<CardRadius> {
        match self {
            Self::Named(name) => name.parse(),
            Self::Pixels(px) => Ok(CardRadius::from_px(*px)),
        }
    }
}

/// A sparse set of field updates. Missing fields keep their current value.
///
/// Doubles as the hydration format: a stored snapshot deserializes into a
/// `PartialUpdate` and is applied on top of the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialUpdate {
    /// New opacity (clamped to 0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_opacity: Option<f64>,
    /// New card radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_radius: Option<RawRadius>,
    /// New shadow flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_shadow: Option<bool>,
    /// New avatar shape name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_shape: Option<String>,
    /// New product title color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<RawColor>,
    /// New product price color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_color: Option<RawColor>,
    /// New theme color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<RawColor>,
    /// New card background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_background: Option<RawColor>,
}

impl PartialUpdate {
    /// Update touching only the card opacity.
    #[must_use]
    pub fn opacity(value: f64) -> Self {
        Self {
            card_opacity: Some(value),
            ..Self::default()
        }
    }

    /// Update setting a named variant on an enum field.
    #[must_use]
    pub fn variant(field: EnumField, variant: impl Into<String>) -> Self {
        let variant = variant.into();
        match field {
            EnumField::CardRadius => Self {
                card_radius: Some(RawRadius::Named(variant)),
                ..Self::default()
            },
            EnumField::AvatarShape => Self {
                avatar_shape: Some(variant),
                ..Self::default()
            },
        }
    }

    /// Update setting a color field.
    #[must_use]
    pub fn color(field: ColorField, color: RawColor) -> Self {
        let mut update = Self::default();
        *update.color_slot(field) = Some(color);
        update
    }

    fn color_slot(&mut self, field: ColorField) -> &mut Option<RawColor> {
        match field {
            ColorField::Theme => &mut self.theme_color,
            ColorField::Title => &mut self.title_color,
            ColorField::Price => &mut self.price_color,
            ColorField::CardBackground => &mut self.card_background,
        }
    }

    /// True if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Validated presentation config for one storefront session.
///
/// Fields are private: the only way to obtain a different model is
/// [`StyleModel::apply`] (or [`StyleModel::hydrate`]), both of which validate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleModel {
    card_opacity: f64,
    card_radius: CardRadius,
    card_shadow: bool,
    avatar_shape: AvatarShape,
    title_color: RgbColor,
    price_color: RgbColor,
    theme_color: RgbColor,
    card_background: RgbColor,
}

impl Default for StyleModel {
    fn default() -> Self {
        Self {
            card_opacity: OPACITY_MAX,
            card_radius: CardRadius::default(),
            card_shadow: false,
            avatar_shape: AvatarShape::default(),
            title_color: RgbColor::BLACK,
            price_color: RgbColor::BLACK,
            theme_color: RgbColor::BLACK,
            card_background: RgbColor::WHITE,
        }
    }
}

impl StyleModel {
    /// Builds a model from defaults with `snapshot` merged on top.
    ///
    /// # Errors
    ///
    /// Same as [`StyleModel::apply`].
    pub fn hydrate(snapshot: &PartialUpdate) -> StyleResult<Self> {
        Self::default().apply(snapshot)
    }

    /// Returns a new model with `update` applied.
    ///
    /// Every field of the update is validated before anything is written, so
    /// an error always leaves `self` as the current model.
    ///
    /// # Errors
    ///
    /// - [`StyleError::InvalidVariant`] if an enum field names an undeclared variant
    /// - [`StyleError::InvalidColor`] if a color is malformed or out of range
    pub fn apply(&self, update: &PartialUpdate) -> StyleResult<Self> {
        let card_radius = update
            .card_radius
            .as_ref()
            .map(RawRadius::resolve)
            .transpose()?;
        let avatar_shape = update
            .avatar_shape
            .as_deref()
            .map(str::parse::<AvatarShape>)
            .transpose()?;
        let title_color = resolve_color(update.title_color.as_ref(), ColorField::Title)?;
        let price_color = resolve_color(update.price_color.as_ref(), ColorField::Price)?;
        let theme_color = resolve_color(update.theme_color.as_ref(), ColorField::Theme)?;
        let card_background =
            resolve_color(update.card_background.as_ref(), ColorField::CardBackground)?;

        Ok(Self {
            card_opacity: update
                .card_opacity
                .map_or(self.card_opacity, |v| normalize_opacity(v, self.card_opacity)),
            card_radius: card_radius.unwrap_or(self.card_radius),
            card_shadow: update.card_shadow.unwrap_or(self.card_shadow),
            avatar_shape: avatar_shape.unwrap_or(self.avatar_shape),
            title_color: title_color.unwrap_or(self.title_color),
            price_color: price_color.unwrap_or(self.price_color),
            theme_color: theme_color.unwrap_or(self.theme_color),
            card_background: card_background.unwrap_or(self.card_background),
        })
    }

    /// Card opacity in 0.0-1.0.
    #[must_use]
    pub const fn card_opacity(&self) -> f64 {
        self.card_opacity
    }

    /// Card opacity as a whole percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn opacity_percent(&self) -> u8 {
        (self.card_opacity * 100.0).round() as u8
    }

    /// Card corner style.
    #[must_use]
    pub const fn card_radius(&self) -> CardRadius {
        self.card_radius
    }

    /// Whether cards carry a drop shadow.
    #[must_use]
    pub const fn card_shadow(&self) -> bool {
        self.card_shadow
    }

    /// Avatar shape.
    #[must_use]
    pub const fn avatar_shape(&self) -> AvatarShape {
        self.avatar_shape
    }

    /// Product title color.
    #[must_use]
    pub const fn title_color(&self) -> RgbColor {
        self.title_color
    }

    /// Product price color.
    #[must_use]
    pub const fn price_color(&self) -> RgbColor {
        self.price_color
    }

    /// Theme color.
    #[must_use]
    pub const fn theme_color(&self) -> RgbColor {
        self.theme_color
    }

    /// Card background color.
    #[must_use]
    pub const fn card_background(&self) -> RgbColor {
        self.card_background
    }

    /// Current value of a color field.
    #[must_use]
    pub const fn color(&self, field: ColorField) -> RgbColor {
        match field {
            ColorField::Theme => self.theme_color,
            ColorField::Title => self.title_color,
            ColorField::Price => self.price_color,
            ColorField::CardBackground => self.card_background,
        }
    }

    /// Current value of a boolean field.
    #[must_use]
    pub const fn flag(&self, field: BoolField) -> bool {
        match field {
            BoolField::CardShadow => self.card_shadow,
        }
    }

    /// Current variant name of an enum field.
    #[must_use]
    pub const fn variant(&self, field: EnumField) -> &'static str {
        match field {
            EnumField::CardRadius => self.card_radius.name(),
            EnumField::AvatarShape => self.avatar_shape.name(),
        }
    }

    /// Full snapshot of this model as an update, for external serialization.
    #[must_use]
    pub fn to_snapshot(&self) -> PartialUpdate {
        PartialUpdate {
            card_opacity: Some(self.card_opacity),
            card_radius: Some(RawRadius::Named(self.card_radius.name().to_string())),
            card_shadow: Some(self.card_shadow),
            avatar_shape: Some(self.avatar_shape.name().to_string()),
            title_color: Some(self.title_color.into()),
            price_color: Some(self.price_color.into()),
            theme_color: Some(self.theme_color.into()),
            card_background: Some(self.card_background.into()),
        }
    }
}

fn resolve_color(raw: Option<&RawColor>, field: ColorField) -> StyleResult<Option<RgbColor>> {
    raw.map(|c| c.resolve(field)).transpose()
}

/// Clamps an opacity into range and snaps it to the storage quantum.
///
/// NaN carries no usable value, so `current` is kept.
fn normalize_opacity(value: f64, current: f64) -> f64 {
    if value.is_nan() {
        return current;
    }
    let clamped = value.clamp(OPACITY_MIN, OPACITY_MAX);
    (clamped * OPACITY_QUANTUM).round() / OPACITY_QUANTUM
}

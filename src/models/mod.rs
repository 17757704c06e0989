//! Data models for the storefront style configuration.
//!
//! Models are independent of UI and binding logic: they only know how to
//! validate and produce new values.

pub mod rgb;
pub mod style;

// Re-export all model types
pub use rgb::RgbColor;
pub use style::{
    AvatarShape, BoolField, CardRadius, ColorField, EnumField, PartialUpdate, RawColor,
    RawRadius, StyleModel, OPACITY_MAX, OPACITY_MIN,
};

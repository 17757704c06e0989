//! Editor controller: the single writer of the style model.
//!
//! The controller owns the current [`StyleModel`], one binding per control,
//! the rendered [`VisualAttributes`], and the preview's scroll and navigation
//! state. Every mutation goes through [`EditorController::dispatch`].

use std::fmt;

use crate::controls::color_picker::ProxyActivation;
use crate::controls::{
    ColorPickerAdapter, ControlBinding, ControlInput, EnumSelector, ProxySize, SliderBinding,
    Surface, ToggleBinding, UpdateRequest,
};
use crate::error::StyleResult;
use crate::models::{
    BoolField, ColorField, PartialUpdate, RawColor, StyleModel, OPACITY_MAX, OPACITY_MIN,
};
use crate::preview::{render, BottomNav, EditorTool, ScrollViewport, VisualAttributes};

/// Identifies one control of the card-styling toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Card opacity slider
    Opacity,
    /// Card radius selector
    CardRadius,
    /// Card shadow switch
    CardShadow,
    /// Card background color
    CardBackground,
    /// Product title color
    TitleColor,
    /// Product price color
    PriceColor,
    /// Avatar shape selector
    AvatarShape,
    /// Theme color
    ThemeColor,
}

impl ControlId {
    /// Controls in layout (and tab) order.
    pub const ALL: [Self; 8] = [
        Self::Opacity,
        Self::CardRadius,
        Self::CardShadow,
        Self::CardBackground,
        Self::TitleColor,
        Self::PriceColor,
        Self::AvatarShape,
        Self::ThemeColor,
    ];

    /// Color picker control bound to `field`.
    #[must_use]
    pub const fn for_color(field: ColorField) -> Self {
        match field {
            ColorField::Theme => Self::ThemeColor,
            ColorField::Title => Self::TitleColor,
            ColorField::Price => Self::PriceColor,
            ColorField::CardBackground => Self::CardBackground,
        }
    }

    /// Color field bound to this control, if it is a color picker.
    #[must_use]
    pub const fn color_field(self) -> Option<ColorField> {
        match self {
            Self::CardBackground => Some(ColorField::CardBackground),
            Self::TitleColor => Some(ColorField::Title),
            Self::PriceColor => Some(ColorField::Price),
            Self::ThemeColor => Some(ColorField::Theme),
            Self::Opacity | Self::CardRadius | Self::CardShadow | Self::AvatarShape => None,
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Opacity => "opacity",
            Self::CardRadius => "card-radius",
            Self::CardShadow => "card-shadow",
            Self::CardBackground => "card-background",
            Self::TitleColor => "title-color",
            Self::PriceColor => "price-color",
            Self::AvatarShape => "avatar-shape",
            Self::ThemeColor => "theme-color",
        };
        f.write_str(name)
    }
}

/// Tunables for a controller instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    /// Opacity change per slider step
    pub opacity_step: f64,
    /// Slider steps per page key
    pub page_multiplier: u8,
    /// Preview viewport height in pixels
    pub viewport_height: u32,
    /// Pinned navigation height in pixels
    pub nav_height: u32,
    /// Number of product cards in the preview
    pub product_count: usize,
    /// Height of one product card in pixels
    pub product_height: u32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            opacity_step: crate::controls::slider::DEFAULT_STEP,
            page_multiplier: crate::controls::slider::DEFAULT_PAGE_MULTIPLIER,
            viewport_height: 844,
            nav_height: 72,
            product_count: 8,
            product_height: 240,
        }
    }
}

/// What an accepted (or ignored) input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// The model differs from before
    pub changed: bool,
    /// A numeric value was clamped into range
    pub clamped: bool,
    /// The control did not react to the input; nothing was applied
    pub ignored: bool,
}

impl UpdateOutcome {
    const fn ignored() -> Self {
        Self {
            changed: false,
            clamped: false,
            ignored: true,
        }
    }
}

/// Composition root of one editing session.
#[derive(Debug, Clone)]
pub struct EditorController {
    model: StyleModel,
    attributes: VisualAttributes,
    render_count: u64,
    settings: EditorSettings,
    viewport: ScrollViewport,
    nav: BottomNav,
    opacity: SliderBinding,
    card_radius: EnumSelector,
    card_shadow: ToggleBinding,
    avatar_shape: EnumSelector,
    card_background: ColorPickerAdapter,
    title_color: ColorPickerAdapter,
    price_color: ColorPickerAdapter,
    theme_color: ColorPickerAdapter,
}

impl EditorController {
    /// Opens a session with the default model.
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_model(StyleModel::default(), settings)
    }

    /// Opens a session hydrated from a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the snapshot holds an invalid value.
    pub fn from_snapshot(snapshot: &PartialUpdate, settings: EditorSettings) -> StyleResult<Self> {
        Ok(Self::with_model(StyleModel::hydrate(snapshot)?, settings))
    }

    fn with_model(model: StyleModel, settings: EditorSettings) -> Self {
        let viewport = ScrollViewport::for_items(
            settings.viewport_height,
            settings.nav_height,
            settings.product_count,
            settings.product_height,
        );
        Self {
            attributes: render(&model),
            render_count: 1,
            viewport,
            nav: BottomNav::default(),
            opacity: SliderBinding::opacity(settings.opacity_step, settings.page_multiplier),
            card_radius: EnumSelector::card_radius(),
            card_shadow: ToggleBinding::card_shadow(),
            avatar_shape: EnumSelector::avatar_shape(),
            card_background: ColorPickerAdapter::new(ColorField::CardBackground, "Card", &model)
                .with_size(ProxySize::Sm),
            title_color: ColorPickerAdapter::new(ColorField::Title, "Title", &model),
            price_color: ColorPickerAdapter::new(ColorField::Price, "Price", &model),
            theme_color: ColorPickerAdapter::new(ColorField::Theme, "Theme", &model)
                .with_size(ProxySize::Lg),
            settings,
            model,
        }
    }

    /// Current model, for hosts that serialize it.
    #[must_use]
    pub const fn snapshot(&self) -> &StyleModel {
        &self.model
    }

    /// Attributes rendered from the current model.
    #[must_use]
    pub const fn attributes(&self) -> &VisualAttributes {
        &self.attributes
    }

    /// Number of renders so far, the initial one included.
    #[must_use]
    pub const fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Session settings.
    #[must_use]
    pub const fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Routes one input through the control's binding and applies the result.
    ///
    /// # Errors
    ///
    /// Validation errors from the binding or the model. The model is left
    /// unchanged and nothing is re-rendered.
    pub fn handle_input(&mut self, id: ControlId, input: ControlInput) -> StyleResult<UpdateOutcome> {
        match self.translate(id, &input) {
            Ok(Some(request)) => self.dispatch(request),
            Ok(None) => {
                tracing::trace!(control = %id, ?input, "input ignored");
                Ok(UpdateOutcome::ignored())
            }
            Err(e) => {
                tracing::warn!(control = %id, error = %e, "control input rejected");
                Err(e)
            }
        }
    }

    fn translate(
        &mut self,
        id: ControlId,
        input: &ControlInput,
    ) -> StyleResult<Option<UpdateRequest>> {
        let model = &self.model;
        match id {
            ControlId::Opacity => self.opacity.translate(input, model),
            ControlId::CardRadius => self.card_radius.translate(input, model),
            ControlId::CardShadow => self.card_shadow.translate(input, model),
            ControlId::AvatarShape => self.avatar_shape.translate(input, model),
            ControlId::CardBackground => self.card_background.translate(input, model),
            ControlId::TitleColor => self.title_color.translate(input, model),
            ControlId::PriceColor => self.price_color.translate(input, model),
            ControlId::ThemeColor => self.theme_color.translate(input, model),
        }
    }

    /// Applies one update request. The only place the model is replaced.
    ///
    /// Accepted requests always re-render, even when the value did not change.
    ///
    /// # Errors
    ///
    /// `InvalidVariant` / `InvalidColor` from the model; the previous model is kept.
    pub fn dispatch(&mut self, request: UpdateRequest) -> StyleResult<UpdateOutcome> {
        let mut requested_opacity = None;
        let update = match &request {
            UpdateRequest::OpacityDelta(delta) => {
                let target = self.model.card_opacity() + delta;
                requested_opacity = Some(target);
                PartialUpdate::opacity(target)
            }
            UpdateRequest::SetOpacity(value) => {
                requested_opacity = Some(*value);
                PartialUpdate::opacity(*value)
            }
            UpdateRequest::SetEnum { field, variant } => {
                PartialUpdate::variant(*field, variant.as_str())
            }
            UpdateRequest::ToggleBool(field) => match field {
                BoolField::CardShadow => PartialUpdate {
                    card_shadow: Some(!self.model.card_shadow()),
                    ..PartialUpdate::default()
                },
            },
            UpdateRequest::SetColor { field, channels } => {
                PartialUpdate::color(*field, RawColor::Channels(*channels))
            }
        };

        let next = self.model.apply(&update).inspect_err(|e| {
            tracing::warn!(?request, error = %e, "style update rejected");
        })?;

        let outcome = UpdateOutcome {
            changed: next != self.model,
            clamped: requested_opacity
                .is_some_and(|v| !v.is_nan() && !(OPACITY_MIN..=OPACITY_MAX).contains(&v)),
            ignored: false,
        };
        self.model = next;
        self.sync_pickers();
        self.rerender();
        tracing::debug!(
            ?request,
            changed = outcome.changed,
            clamped = outcome.clamped,
            "style update applied"
        );
        Ok(outcome)
    }

    fn sync_pickers(&mut self) {
        let model = &self.model;
        for picker in [
            &mut self.card_background,
            &mut self.title_color,
            &mut self.price_color,
            &mut self.theme_color,
        ] {
            picker.sync(model);
        }
    }

    fn rerender(&mut self) {
        self.attributes = render(&self.model);
        self.render_count += 1;
    }

    /// Label of a control.
    #[must_use]
    pub fn label(&self, id: ControlId) -> &str {
        self.binding(id).label()
    }

    fn binding(&self, id: ControlId) -> &dyn ControlBinding {
        match id {
            ControlId::Opacity => &self.opacity,
            ControlId::CardRadius => &self.card_radius,
            ControlId::CardShadow => &self.card_shadow,
            ControlId::AvatarShape => &self.avatar_shape,
            ControlId::CardBackground => &self.card_background,
            ControlId::TitleColor => &self.title_color,
            ControlId::PriceColor => &self.price_color,
            ControlId::ThemeColor => &self.theme_color,
        }
    }

    /// Color picker bound to `field`.
    #[must_use]
    pub const fn picker(&self, field: ColorField) -> &ColorPickerAdapter {
        match field {
            ColorField::CardBackground => &self.card_background,
            ColorField::Title => &self.title_color,
            ColorField::Price => &self.price_color,
            ColorField::Theme => &self.theme_color,
        }
    }

    /// Pointer click on a color proxy. Forwards one activation to its native
    /// input; the model is untouched.
    pub fn click_color_proxy(&mut self, field: ColorField) -> ProxyActivation {
        let picker = match field {
            ColorField::CardBackground => &mut self.card_background,
            ColorField::Title => &mut self.title_color,
            ColorField::Price => &mut self.price_color,
            ColorField::Theme => &mut self.theme_color,
        };
        picker.click_proxy()
    }

    /// Commits a raw channel triple from the native input of `field`.
    ///
    /// # Errors
    ///
    /// `InvalidColor` if any channel is outside 0-255; the model is kept.
    pub fn commit_color_channels(
        &mut self,
        field: ColorField,
        channels: [i64; 3],
    ) -> StyleResult<UpdateOutcome> {
        let request = self.picker(field).commit_channels(channels).inspect_err(|e| {
            tracing::warn!(%field, error = %e, "color commit rejected");
        })?;
        self.dispatch(request)
    }

    /// Every element in the control render tree, native inputs included.
    #[must_use]
    pub fn surfaces(&self) -> Vec<(ControlId, Surface)> {
        ControlId::ALL
            .into_iter()
            .flat_map(|id| {
                self.binding(id)
                    .surfaces(&self.model)
                    .into_iter()
                    .map(move |s| (id, s))
            })
            .collect()
    }

    /// Elements reachable by sequential keyboard navigation, in order.
    #[must_use]
    pub fn tab_order(&self) -> Vec<(ControlId, Surface)> {
        self.surfaces()
            .into_iter()
            .filter(|(_, s)| s.is_tabbable())
            .collect()
    }

    /// Controls with at least one tabbable element, in order.
    #[must_use]
    pub fn focusable_controls(&self) -> Vec<ControlId> {
        let mut ids: Vec<ControlId> = self.tab_order().into_iter().map(|(id, _)| id).collect();
        ids.dedup();
        ids
    }

    /// Preview scroll state.
    #[must_use]
    pub const fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    /// Scrolls the preview; independent of the style model.
    pub fn scroll_to(&mut self, offset: i64) -> u32 {
        self.viewport.scroll_to(offset)
    }

    /// Scrolls the preview by a delta.
    pub fn scroll_by(&mut self, delta: i64) -> u32 {
        self.viewport.scroll_by(delta)
    }

    /// Scrolls to the last product.
    pub fn scroll_to_end(&mut self) -> u32 {
        self.viewport.scroll_to_end()
    }

    /// Resizes the preview viewport.
    pub fn resize_preview(&mut self, viewport_height: u32) {
        self.viewport.resize(viewport_height);
    }

    /// Indices of the products at least partly visible.
    #[must_use]
    pub fn visible_products(&self) -> std::ops::Range<usize> {
        self.viewport
            .visible_items(self.settings.product_height, self.settings.product_count)
    }

    /// Navigation bar state.
    #[must_use]
    pub const fn nav(&self) -> &BottomNav {
        &self.nav
    }

    /// Switches the active tool. Touches neither the model nor the scroll offset.
    pub fn select_tool(&mut self, tool: EditorTool) {
        tracing::debug!(%tool, "tool selected");
        self.nav.select(tool);
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

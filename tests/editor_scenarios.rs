//! End-to-end editing sessions driven through the public controller API.

use storestyle::controls::{ControlInput, Role};
use storestyle::models::{AvatarShape, CardRadius, ColorField, PartialUpdate, RgbColor};
use storestyle::preview::{CARD_SHADOW, RADIUS_MAX_PX};
use storestyle::{ControlId, EditorController, EditorSettings, StyleError};

fn session() -> EditorController {
    EditorController::new(EditorSettings::default())
}

fn press(editor: &mut EditorController, id: ControlId, input: ControlInput) {
    editor
        .handle_input(id, input)
        .unwrap_or_else(|e| panic!("{id} rejected input: {e}"));
}

#[test]
fn test_full_card_restyle() {
    let mut editor = session();

    for _ in 0..3 {
        press(&mut editor, ControlId::Opacity, ControlInput::Decrement);
    }
    press(&mut editor, ControlId::CardRadius, ControlInput::Select("pill".into()));
    press(&mut editor, ControlId::CardShadow, ControlInput::Activate);
    press(&mut editor, ControlId::AvatarShape, ControlInput::Select("square".into()));
    editor.click_color_proxy(ColorField::Price);
    press(&mut editor, ControlId::PriceColor, ControlInput::Commit("#00AA55".into()));

    let model = editor.snapshot();
    assert!((model.card_opacity() - 0.7).abs() < 1e-9);
    assert_eq!(model.card_radius(), CardRadius::Pill);
    assert!(model.card_shadow());
    assert_eq!(model.avatar_shape(), AvatarShape::Square);
    assert_eq!(model.price_color(), RgbColor::new(0x00, 0xAA, 0x55));

    let attributes = editor.attributes();
    assert_eq!(attributes.card.opacity_percent, 70);
    assert_eq!(attributes.card.border_radius_px, 32);
    assert_eq!(attributes.card.box_shadow, Some(CARD_SHADOW));
    assert_eq!(attributes.avatar.border_radius, "0");
    assert_eq!(attributes.price.color, RgbColor::new(0x00, 0xAA, 0x55));

    // Initial render plus one per accepted input
    assert_eq!(editor.render_count(), 1 + 3 + 4);
}

#[test]
fn test_decrements_never_go_negative() {
    for n in 0..=25 {
        let mut editor = session();
        for _ in 0..n {
            press(&mut editor, ControlId::Opacity, ControlInput::Decrement);
        }
        let expected = (1.0 - 0.1 * f64::from(n)).max(0.0);
        let actual = editor.snapshot().card_opacity();
        assert!(
            (actual - expected).abs() < 1e-9,
            "after {n} decrements: expected {expected}, got {actual}"
        );
        assert!(actual >= 0.0);
    }
}

#[test]
fn test_pill_shadow_half_opacity_scenario() {
    let mut editor = session();
    press(&mut editor, ControlId::CardRadius, ControlInput::Select("pill".into()));
    press(&mut editor, ControlId::CardShadow, ControlInput::Activate);
    for _ in 0..5 {
        press(&mut editor, ControlId::Opacity, ControlInput::Decrement);
    }

    let model = editor.snapshot();
    assert!((model.card_opacity() - 0.5).abs() < f64::EPSILON);
    assert_eq!(model.card_radius(), CardRadius::Pill);
    assert!(model.card_shadow());

    let card = &editor.attributes().card;
    assert_eq!(card.border_radius_px, RADIUS_MAX_PX);
    assert_eq!(card.box_shadow, Some(CARD_SHADOW));
    assert_eq!(card.opacity_percent, 50);
    assert_eq!(
        card.to_css(),
        "opacity: 0.5; border-radius: 32px; background-color: #FFFFFF; \
         box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);"
    );
}

#[test]
fn test_rejections_leave_session_intact() {
    let mut editor = session();
    press(&mut editor, ControlId::CardRadius, ControlInput::Select("rounded".into()));
    let before = editor.snapshot().clone();
    let renders = editor.render_count();

    let err = editor
        .handle_input(ControlId::CardRadius, ControlInput::Select("oval".into()))
        .unwrap_err();
    assert!(matches!(err, StyleError::InvalidVariant { .. }));

    let err = editor
        .handle_input(ControlId::TitleColor, ControlInput::Commit("#12345".into()))
        .unwrap_err();
    assert!(matches!(err, StyleError::InvalidColor { field: ColorField::Title, .. }));

    assert_eq!(editor.snapshot(), &before);
    assert_eq!(editor.render_count(), renders);
}

#[test]
fn test_opacity_bounds_across_inputs() {
    let mut editor = session();

    press(&mut editor, ControlId::Opacity, ControlInput::PageDecrement);
    assert!(editor.snapshot().card_opacity().abs() < f64::EPSILON);

    let outcome = editor
        .handle_input(ControlId::Opacity, ControlInput::Decrement)
        .unwrap();
    assert!(outcome.clamped);
    assert!(!outcome.changed);
    assert!(editor.snapshot().card_opacity().abs() < f64::EPSILON);

    press(&mut editor, ControlId::Opacity, ControlInput::End);
    assert!((editor.snapshot().card_opacity() - 1.0).abs() < f64::EPSILON);
    let outcome = editor
        .handle_input(ControlId::Opacity, ControlInput::Increment)
        .unwrap();
    assert!(outcome.clamped);
    assert!((editor.snapshot().card_opacity() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_snapshot_survives_reload() {
    let mut editor = session();
    press(&mut editor, ControlId::Opacity, ControlInput::Decrement);
    press(&mut editor, ControlId::CardShadow, ControlInput::Activate);
    press(&mut editor, ControlId::ThemeColor, ControlInput::Commit("#336699".into()));

    let json = serde_json::to_string(editor.snapshot()).unwrap();
    let snapshot: PartialUpdate = serde_json::from_str(&json).unwrap();
    let reloaded = EditorController::from_snapshot(&snapshot, EditorSettings::default()).unwrap();

    assert_eq!(reloaded.snapshot(), editor.snapshot());
    assert_eq!(reloaded.attributes(), editor.attributes());
    assert_eq!(reloaded.picker(ColorField::Theme).fill(), RgbColor::new(0x33, 0x66, 0x99));
}

#[test]
fn test_color_proxy_forwards_without_committing() {
    let mut editor = session();
    let activation = editor.click_color_proxy(ColorField::CardBackground);
    assert_eq!(activation.field, ColorField::CardBackground);
    assert_eq!(activation.current, RgbColor::WHITE);
    assert_eq!(editor.picker(ColorField::CardBackground).native().activation_count(), 1);
    assert_eq!(editor.render_count(), 1);

    // Keyboard activation of the proxy does the same
    press(&mut editor, ControlId::CardBackground, ControlInput::Activate);
    assert_eq!(editor.picker(ColorField::CardBackground).native().activation_count(), 2);
    assert_eq!(editor.render_count(), 1);
}

#[test]
fn test_keyboard_reaches_every_control_once() {
    let editor = session();
    assert_eq!(editor.focusable_controls(), ControlId::ALL.to_vec());

    let tab_order = editor.tab_order();
    assert!(tab_order.iter().all(|(_, s)| s.role != Role::ColorInput));
    let proxies = tab_order
        .iter()
        .filter(|(_, s)| s.role == Role::ColorProxy)
        .count();
    assert_eq!(proxies, ColorField::ALL.len());
}

#[test]
fn test_hydration_rejects_bad_snapshot() {
    let snapshot: PartialUpdate =
        serde_json::from_str(r#"{"titleColor": [0, 300, 0]}"#).unwrap();
    let err = EditorController::from_snapshot(&snapshot, EditorSettings::default()).unwrap_err();
    assert!(matches!(err, StyleError::InvalidColor { field: ColorField::Title, .. }));
}

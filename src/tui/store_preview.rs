//! Mobile storefront preview.
//!
//! Pixel lengths from the [`ScrollViewport`] are mapped onto terminal rows at
//! a fixed pixels-per-row scale. Only products inside the visible window are
//! laid out. The bottom navigation is drawn in its own strip below the
//! scrolled region, so it stays put whatever the offset.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Tabs,
    },
    Frame,
};

use super::{AppState, Theme};
use crate::models::{AvatarShape, CardRadius, RgbColor};
use crate::preview::{ScrollViewport, VisualAttributes};

/// Vertical placement of one product card, in rows relative to the content top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Product index (0-based)
    pub index: usize,
    /// First visible row
    pub top: u16,
    /// Visible rows
    pub height: u16,
}

/// Preview widget
pub struct StorePreview;

impl StorePreview {
    /// Render the phone frame, product list, and pinned navigation
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let attributes = state.editor.attributes();
        let viewport = state.editor.viewport();

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(header_title(attributes))
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.page.to_ratatui_color()));
        let inner = frame.inner(area);
        f.render_widget(frame, area);

        if inner.height < 2 || inner.width < 4 {
            return;
        }

        let px_per_row = px_per_row(viewport, inner.height);
        let nav_rows = viewport
            .nav_height()
            .div_ceil(px_per_row)
            .clamp(1, u32::from(inner.height) - 1) as u16;
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(nav_rows)])
            .split(inner);
        let (content, nav) = (chunks[0], chunks[1]);

        let settings = state.editor.settings();
        let slots = card_slots(
            viewport,
            settings.product_height,
            settings.product_count,
            px_per_row,
            content.height,
        );
        for slot in slots {
            render_card(f, content, slot, attributes, theme);
        }

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_symbol("█")
            .style(Style::default().fg(theme.text_muted));
        let mut scrollbar_state = ScrollbarState::new(viewport.max_offset() as usize)
            .position(viewport.scroll_offset() as usize);
        f.render_stateful_widget(scrollbar, content, &mut scrollbar_state);

        render_nav(f, nav, state, attributes);
    }
}

/// Store header with the avatar drawn in its current shape.
fn header_title(attributes: &VisualAttributes) -> Line<'static> {
    let avatar = match attributes.avatar.shape {
        AvatarShape::Circle => "(●)",
        AvatarShape::Square => "[■]",
    };
    Line::from(vec![
        Span::styled(
            format!(" {avatar} "),
            Style::default().fg(attributes.accent.to_ratatui_color()),
        ),
        Span::styled(
            "Mi Tienda ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Pixels represented by one terminal row when `rows` show the whole viewport.
fn px_per_row(viewport: &ScrollViewport, rows: u16) -> u32 {
    viewport
        .viewport_height()
        .div_ceil(u32::from(rows.max(1)))
        .max(1)
}

/// Visible part of each product card inside a content region of `rows` rows.
///
/// Only products in the viewport's visible range are considered; cards cut
/// by the top or bottom edge are shortened.
pub fn card_slots(
    viewport: &ScrollViewport,
    product_height: u32,
    product_count: usize,
    px_per_row: u32,
    rows: u16,
) -> Vec<CardSlot> {
    let offset = i64::from(viewport.scroll_offset());
    let scale = i64::from(px_per_row.max(1));
    let rows = i64::from(rows);

    viewport
        .visible_items(product_height, product_count)
        .filter_map(|index| {
            let top_px = index as i64 * i64::from(product_height) - offset;
            let top = top_px.div_euclid(scale);
            let bottom = (top_px + i64::from(product_height)).div_euclid(scale);
            let (top, bottom) = (top.max(0), bottom.min(rows));
            (bottom > top).then(|| CardSlot {
                index,
                top: top as u16,
                height: (bottom - top) as u16,
            })
        })
        .collect()
}

fn render_card(
    f: &mut Frame,
    content: Rect,
    slot: CardSlot,
    attributes: &VisualAttributes,
    theme: &Theme,
) {
    // One column of gutter on each side, two on the right for the shadow + scrollbar
    let width = content.width.saturating_sub(4);
    if width < 4 {
        return;
    }
    let rect = Rect {
        x: content.x + 1,
        y: content.y + slot.top,
        width,
        height: slot.height,
    };

    let card = &attributes.card;
    let alpha = card.opacity;
    let page = theme.page;
    let bg = card.background.blend_over(page, alpha);

    if card.box_shadow.is_some() {
        let shadow = Rect {
            x: rect.x + 1,
            y: rect.y + 1,
            width: rect.width,
            height: rect.height.min((content.y + content.height).saturating_sub(rect.y + 1)),
        };
        f.render_widget(Block::default().style(Style::default().bg(theme.shadow)), shadow);
    }

    let (border_type, padding) = match border_for(card.border_radius_px) {
        CardRadius::Square => (BorderType::Plain, Padding::horizontal(1)),
        CardRadius::Rounded => (BorderType::Rounded, Padding::horizontal(1)),
        CardRadius::Pill => (BorderType::Rounded, Padding::horizontal(3)),
    };

    let border_color = RgbColor::new(0x9C, 0xA3, 0xAF).blend_over(page, alpha);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color.to_ratatui_color()))
        .padding(padding)
        .style(Style::default().bg(bg.to_ratatui_color()));

    let title_color = attributes.title.color.blend_over(bg, alpha);
    let price_color = attributes.price.color.blend_over(bg, alpha);
    let number = slot.index + 1;
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Producto {number}"),
            Style::default()
                .fg(title_color.to_ratatui_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("$ {}.00", number * 10),
            Style::default().fg(price_color.to_ratatui_color()),
        )),
    ])
    .block(block);

    f.render_widget(body, rect);
}

/// Terminal border style for a rendered corner radius.
fn border_for(radius_px: u16) -> CardRadius {
    CardRadius::from_px(u32::from(radius_px))
}

fn render_nav(f: &mut Frame, area: Rect, state: &AppState, attributes: &VisualAttributes) {
    let theme = &state.theme;
    let nav = state.editor.nav();
    let titles: Vec<Line> = nav
        .items()
        .enumerate()
        .map(|(slot, (tool, _))| Line::from(format!("{} {}", slot + 1, tool.label())))
        .collect();
    let selected = nav.items().position(|(_, active)| active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme.text_secondary).bg(theme.surface))
        .highlight_style(
            Style::default()
                .fg(attributes.accent.to_ratatui_color())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(tabs, area);
}

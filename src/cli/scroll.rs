//! Scroll command: report the preview layout at a given scroll offset.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::editor::EditorController;
use clap::Args;
use serde::Serialize;

/// Show the preview viewport layout at a scroll offset
#[derive(Debug, Clone, Args)]
pub struct ScrollArgs {
    /// Requested scroll offset in pixels (clamped to the content)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub offset: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of the scroll command
#[derive(Serialize, Debug, PartialEq, Eq)]
struct ScrollOutput {
    requested_offset: i64,
    scroll_offset: u32,
    max_offset: u32,
    viewport_height: u32,
    nav_height: u32,
    nav_position: u32,
    content_height: u32,
    /// 1-based indices of the products at least partly visible
    visible_products: Vec<usize>,
    /// 1-based indices of the products fully visible
    fully_visible_products: Vec<usize>,
}

impl ScrollArgs {
    /// Execute the scroll command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut editor = EditorController::new(config.editor_settings());
        let output = layout_at(&mut editor, self.offset);

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize layout: {}", e)))?;
            println!("{}", json);
        } else {
            println!(
                "Offset:   {} (requested {}, max {})",
                output.scroll_offset, output.requested_offset, output.max_offset
            );
            println!(
                "Viewport: {}px, content {}px",
                output.viewport_height, output.content_height
            );
            println!(
                "Nav:      {}px pinned at y={}",
                output.nav_height, output.nav_position
            );
            println!("Visible:  {}", format_indices(&output.visible_products));
            println!("Full:     {}", format_indices(&output.fully_visible_products));
        }

        Ok(())
    }
}

fn layout_at(editor: &mut EditorController, offset: i64) -> ScrollOutput {
    editor.scroll_to(offset);
    let viewport = editor.viewport();
    let item_height = editor.settings().product_height;
    let visible = editor.visible_products();

    ScrollOutput {
        requested_offset: offset,
        scroll_offset: viewport.scroll_offset(),
        max_offset: viewport.max_offset(),
        viewport_height: viewport.viewport_height(),
        nav_height: viewport.nav_height(),
        nav_position: viewport.nav_position(),
        content_height: viewport.content_height(),
        visible_products: visible.clone().map(|i| i + 1).collect(),
        fully_visible_products: visible
            .filter(|&i| viewport.is_item_fully_visible(i, item_height))
            .map(|i| i + 1)
            .collect(),
    }
}

fn format_indices(indices: &[usize]) -> String {
    if indices.is_empty() {
        return "none".to_string();
    }
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorSettings;

    #[test]
    fn test_layout_at_end_shows_last_product() {
        let mut editor = EditorController::new(EditorSettings::default());
        let output = layout_at(&mut editor, 100_000);
        // 8 x 240 content in a 772px content area
        assert_eq!(output.max_offset, 1920 - 772);
        assert_eq!(output.scroll_offset, output.max_offset);
        assert_eq!(output.nav_position, 772);
        assert!(output.fully_visible_products.contains(&8));
    }

    #[test]
    fn test_negative_offset_clamps_to_top() {
        let mut editor = EditorController::new(EditorSettings::default());
        let output = layout_at(&mut editor, -40);
        assert_eq!(output.scroll_offset, 0);
        assert_eq!(output.visible_products, vec![1, 2, 3, 4]);
        assert_eq!(output.fully_visible_products, vec![1, 2, 3]);
    }

    #[test]
    fn test_format_indices() {
        assert_eq!(format_indices(&[]), "none");
        assert_eq!(format_indices(&[7, 8]), "7, 8");
    }
}

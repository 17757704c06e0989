//! Render command: hydrate a snapshot and print the preview attributes.

use crate::cli::common::{read_snapshot, CliError, CliResult};
use crate::models::StyleModel;
use crate::preview::{render, VisualAttributes};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Render the preview attributes of a style snapshot
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Snapshot JSON file
    #[arg(value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of the render command
#[derive(Serialize, Debug)]
struct RenderOutput<'a> {
    snapshot: &'a StyleModel,
    attributes: &'a VisualAttributes,
    css: CssOutput,
}

#[derive(Serialize, Debug)]
struct CssOutput {
    card: String,
    avatar: String,
    title: String,
    price: String,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let snapshot = read_snapshot(&self.snapshot)?;
        let model = StyleModel::hydrate(&snapshot)?;
        let attributes = render(&model);
        tracing::debug!(path = %self.snapshot.display(), "snapshot rendered");

        if self.json {
            let output = RenderOutput {
                snapshot: &model,
                attributes: &attributes,
                css: CssOutput {
                    card: attributes.card.to_css(),
                    avatar: attributes.avatar.to_css(),
                    title: attributes.title.to_css(),
                    price: attributes.price.to_css(),
                },
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize attributes: {}", e)))?;
            println!("{}", json);
        } else {
            output_human_readable(&model, &attributes);
        }

        Ok(())
    }
}

fn output_human_readable(model: &StyleModel, attributes: &VisualAttributes) {
    println!("Card");
    println!(
        "  Opacity:    {}%",
        attributes.card.opacity_percent
    );
    println!(
        "  Radius:     {} ({}px)",
        model.card_radius().label(),
        attributes.card.border_radius_px
    );
    println!(
        "  Shadow:     {}",
        attributes.card.box_shadow.unwrap_or("none")
    );
    println!("  Background: {}", attributes.card.background);
    println!("Avatar");
    println!(
        "  Shape:      {} (border-radius: {})",
        model.avatar_shape().label(),
        attributes.avatar.border_radius
    );
    println!("Text");
    println!("  Title:      {}", attributes.title.color);
    println!("  Price:      {}", attributes.price.color);
    println!("Theme:        {}", attributes.accent);
    println!();
    println!("CSS");
    println!("  .card   {{ {} }}", attributes.card.to_css());
    println!("  .avatar {{ {} }}", attributes.avatar.to_css());
    println!("  .title  {{ {} }}", attributes.title.to_css());
    println!("  .price  {{ {} }}", attributes.price.to_css());
}

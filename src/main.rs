//! `tweak-demo`: drives the sample screen headlessly.
//!
//! Renders the "Hello, world!" screen with its four tunables, applies any
//! edits given on the command line after the first cycle, and prints every
//! frame as pretty JSON on stdout.


use clap::Parser;
use serde_json::Value;
use tweakables::config::{ConfigError, PanelConfig};
use tweakables::{Color, Element, Panel, PanelAction, TweakError, View, ViewExt};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("panel config: {0}")]
    Config(#[from] ConfigError),
    #[error("render failed: {0}")]
    Render(#[from] TweakError),
    #[error("frame encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("--edit needs at least 2 cycles to be rendered, got --cycles {cycles}")]
    EditsNeverRendered { cycles: u64 },
}

#[derive(Parser, Debug)]
#[command(name = "tweak-demo", about = "Render the tunable demo screen and print each frame")]
struct Cli {
    /// Edit applied after the first cycle, as `label=value`. The value is
    /// parsed as JSON, falling back to a plain string.
    #[arg(long = "edit", env = "TWEAK_EDITS", value_delimiter = ';', value_parser = parse_edit)]
    edits: Vec<Edit>,

    /// Number of render cycles.
    #[arg(long, env = "TWEAK_CYCLES", default_value_t = 2)]
    cycles: u64,
}

impl Cli {
    /// Edits land after cycle 1, so they need a second cycle to show up.
    fn check(&self) -> Result<(), DemoError> {
        if !self.edits.is_empty() && self.cycles < 2 {
            return Err(DemoError::EditsNeverRendered { cycles: self.cycles });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Edit {
    label: String,
    value: Value,
}

fn parse_edit(raw: &str) -> Result<Edit, String> {
    let (label, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected label=value, got {raw:?}"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in {raw:?}"));
    }
    let value = value.trim();
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok(Edit { label: label.to_owned(), value })
}

/// The sample screen: one text line with padding, offset, tint and a
/// background that reuses the `padding` label with a color type.
fn screen() -> impl View {
    Element::text("Hello, world!")
        .tweakable("padding", 10.0_f64, |content, amount| content.padding(amount))
        .tweakable("offset", 10.0_f64, |content, x| content.offset(x, 0.0))
        .tweakable("foreground color", Color::WHITE, |content, color| content.foreground(color))
        .tweakable("padding", Color::BLUE, |content, color| content.background(color))
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.check()?;
    let config = PanelConfig::from_env()?;
    let mut panel = Panel::with_config(screen(), config);

    for cycle in 1..=cli.cycles {
        let frame = panel.render()?;
        println!("{}", serde_json::to_string_pretty(&frame)?);

        if cycle == 1 {
            for edit in &cli.edits {
                match panel.edit(&edit.label, &edit.value) {
                    Ok(PanelAction::RenderNeeded) => {
                        tracing::info!(label = %edit.label, value = %edit.value, "edit applied");
                    }
                    Ok(PanelAction::None) => {
                        tracing::info!(label = %edit.label, "edit left value unchanged");
                    }
                    Err(e) => tracing::warn!(label = %edit.label, error = %e, "edit rejected"),
                }
            }
        }
    }

    tracing::info!(cycles = panel.cycle(), tunables = panel.core().len(), "demo finished");
    Ok(())
}

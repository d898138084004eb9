//! Shared prompt primitives for contactmgr
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `name: `
//! - Feedback: single word when possible: `Saved.`

use anyhow::Result;
use inquire::{ui::RenderConfig, Confirm, Text};

/// Result of prompting for one form field
pub enum FormResult {
    Value(String),
    Cancelled,
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for a field. Escape cancels the whole form.
pub fn prompt_field(label: &str) -> Result<FormResult> {
    let result = Text::new(&format!("{}:", label))
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;

    Ok(match result {
        Some(v) => FormResult::Value(v.trim().to_string()),
        None => FormResult::Cancelled,
    })
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()?;
    Ok(result)
}

/// Print a JSON value on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

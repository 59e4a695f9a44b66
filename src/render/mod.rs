//! Report rendering.
//!
//! Turns a [`ReviewResult`] into the text written to stdout or `--output`.
//! Rendering never changes the result; grouping by severity happens here only.

mod json;
mod text;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::review::ReviewResult;

pub use json::render_json;
pub use text::render_text;

/// Render `result` in `format`.
pub fn render(result: &ReviewResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(result),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

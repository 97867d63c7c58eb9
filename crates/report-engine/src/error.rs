//! Error types for report rendering

use thiserror::Error;

/// Rendering is the one stage allowed to fail hard: a silently corrupted
/// report is worse than an error the caller can act on.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("control character U+{codepoint:04X} in {context} cannot be rendered")]
    UnrenderableText { context: String, codepoint: u32 },
}

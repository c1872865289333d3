// ── SpriteError ───────────────────────────────────────────────────────────────

/// Errors raised by the fallible sprite operations.
///
/// The parity helpers (`calculate_sprite_difference`, `is_sprite_empty`, ...)
/// never return these; they degrade to a neutral value instead.
#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("sprite must have exactly 8 rows, got {rows}")]
    InvalidShape { rows: usize },

    #[error("sprite image must be 5x8 pixels, got {width}x{height}")]
    ImageSize { width: u32, height: u32 },

    #[error("could not decode sprite image: {0}")]
    Image(#[from] image::ImageError),

    #[error("No data provided")]
    NoData,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("{field}[{index}] = {value} is not a byte")]
    InvalidRow {
        field: &'static str,
        index: usize,
        value: String,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

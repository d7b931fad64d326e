//! Shareable result formatting

mod formatter;

pub use formatter::{
    DURATION_PLACEHOLDER, GlyphStyle, SHARE_FOOTER, ShareRequest, format_duration,
    format_share_text, glyph_row,
};

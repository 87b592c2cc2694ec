//! Static presentation settings for a mounted board.
//!
//! Runtime inputs (viewer seat, status, state blobs) come from the host
//! element's data attributes; see [`crate::web`].

/// Presentation knobs. `Default` matches the stock board.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// Canvas padding in px on the left and right.
    pub h_pad: f64,
    /// Canvas padding in px on the top and bottom.
    pub v_pad: f64,
    /// The padded canvas is divided into this many sections per axis
    /// (8 grid + 2 slot rows + margins).
    pub sections: u32,
    pub font: String,
    pub text_color: String,
    pub line_color: String,
    pub line_width: f64,
    /// Marker drawn on a slot holding a staged shot.
    pub holding_glyph: String,
    /// Name of the DOM event carrying shot requests to the host page.
    pub shot_event: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            h_pad: 2.0,
            v_pad: 2.0,
            sections: 12,
            font: "16px Arial".to_string(),
            text_color: "black".to_string(),
            line_color: "black".to_string(),
            line_width: 1.0,
            holding_glyph: "⦿".to_string(),
            shot_event: "quadboard:shoot".to_string(),
        }
    }
}

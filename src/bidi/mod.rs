//! Right-to-left text support.
//!
//! Renderers with native bidirectional layout only need `contains_arabic`
//! to decide where to set RTL direction. Renderers that place code points
//! left to right use `prepare_for_visual` instead.

pub mod reorder;
pub mod shaping;

pub use reorder::visual_order;
pub use shaping::shape;

/// True when the text contains characters from the Arabic blocks.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|ch| {
        matches!(
            ch,
            '\u{0600}'..='\u{06FF}'
                | '\u{0750}'..='\u{077F}'
                | '\u{08A0}'..='\u{08FF}'
                | '\u{FB50}'..='\u{FDFF}'
                | '\u{FE70}'..='\u{FEFF}'
        )
    })
}

/// Shape Arabic letters and reorder the text for a left-to-right canvas.
/// Text without Arabic characters comes back as is.
pub fn prepare_for_visual(text: &str) -> String {
    if !contains_arabic(text) {
        return text.to_string();
    }
    visual_order(&shape(text))
}

//! Text measuring and wrapping.

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width};
pub use wrap::{bubble_width, wrap_text};

//! Items that live in the display list.

use crate::surface::Surface;

pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::{STICKER_FONT_SIZE, StickerMark};
pub use stroke::Stroke;

/// Anything that can paint itself onto a [`Surface`].
///
/// Implementations pass their style with every surface call and must leave
/// the surface transform as they found it.
pub trait Drawable {
    fn render(&self, surface: &mut dyn Surface);
}

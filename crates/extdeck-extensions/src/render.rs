//! Renderer boundary

use crate::view::Frame;

/// Receives every frame the controller produces
///
/// Implementations own all presentation concerns: drawing, theming and
/// substituting the fallback logo when a card's logo cannot be resolved.
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &Frame) {
        (**self).render(frame)
    }
}

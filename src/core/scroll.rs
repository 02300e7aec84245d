use super::constants::*;

/// One processed scroll sample together with the document metrics it is
/// derived from. `prev_offset` exists only to determine scroll direction.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSample {
    pub offset: f64,
    pub prev_offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Visual state derived from a single scroll sample. Pure function of the
/// sample; the adapter layer applies it to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollView {
    pub header_hidden: bool,
    pub header_scrolled: bool,
    pub page_progress: f64,
    pub floating_visible: bool,
}

pub fn derive_view(s: ScrollSample) -> ScrollView {
    let scrollable = (s.document_height - s.viewport_height).max(1.0);
    ScrollView {
        header_hidden: s.offset > s.prev_offset && s.offset > HEADER_HIDE_OFFSET_PX,
        header_scrolled: s.offset > HEADER_SCROLLED_OFFSET_PX,
        page_progress: (s.offset / scrollable).clamp(0.0, 1.0),
        floating_visible: s.offset > FLOATING_SHOW_OFFSET_PX,
    }
}

/// Visible proportion of a content region, from its viewport-relative rect.
pub fn reading_progress(viewport_height: f64, rect_top: f64, rect_height: f64) -> f64 {
    let denom = rect_height + viewport_height;
    if denom <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / denom).clamp(0.0, 1.0)
}

/// Vertical translation of a decorative layer; speeds rise by a fixed step
/// per layer index.
#[inline]
pub fn parallax_offset(offset: f64, layer_index: usize) -> f64 {
    offset * (PARALLAX_BASE_SPEED + PARALLAX_SPEED_STEP * layer_index as f64)
}

/// Trailing-edge coalescer: at most one scheduled recomputation per frame,
/// excess triggers drop.
#[derive(Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller should schedule a frame callback; false means an
    /// update is already pending and this trigger is dropped.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

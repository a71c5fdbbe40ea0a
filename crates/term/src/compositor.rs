//! Frame compositor: paints the world into a framebuffer.
//!
//! This module is pure (no I/O). Entities are painted in registration order,
//! then the border is drawn last so content never hides it.

use crate::core::{Entity, World};
use crate::fb::FrameBuffer;
use crate::types::{BLANK_GLYPH, BORDER_HORIZONTAL, BORDER_VERTICAL};

/// Render a fresh `width` x `height` frame.
pub fn render_frame(world: &World, width: u16, height: u16) -> FrameBuffer {
    let mut fb = FrameBuffer::new(width, height);
    render_into(world, &mut fb);
    fb
}

/// Render into an existing framebuffer, overwriting every cell.
///
/// This is the allocation-free hot path used every frame.
pub fn render_into(world: &World, fb: &mut FrameBuffer) {
    fb.clear(BLANK_GLYPH);
    for entity in world.iter() {
        paint_entity(entity, fb);
    }
    draw_border(fb);
}

/// Paint an entity's active view. Invisible and view-less entities are skipped.
pub fn paint_entity(entity: &Entity, fb: &mut FrameBuffer) {
    if !entity.visible {
        return;
    }
    let Some(view) = entity.active_view() else {
        return;
    };

    let start_x = entity.x - view.origin_x();
    let start_y = entity.y - view.origin_y();
    for (dy, row) in view.rows().enumerate() {
        let y = start_y + dy as i32;
        for (dx, ch) in row.chars().enumerate() {
            fb.put_clipped(start_x + dx as i32, y, ch);
        }
    }
}

/// One-cell frame: `=` rows top and bottom, `|` columns left and right.
pub fn draw_border(fb: &mut FrameBuffer) {
    let (w, h) = (fb.width(), fb.height());
    if w == 0 || h == 0 {
        return;
    }
    for x in 0..w {
        fb.set(x, 0, BORDER_HORIZONTAL);
        fb.set(x, h - 1, BORDER_HORIZONTAL);
    }
    for y in 0..h {
        fb.set(0, y, BORDER_VERTICAL);
        fb.set(w - 1, y, BORDER_VERTICAL);
    }
}

//! Framebuffer: a screen-sized grid of character cells.

use crate::types::BLANK_GLYPH;

/// 2D framebuffer of characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    /// A blank framebuffer.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK_GLYPH; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Set a cell given signed coordinates; anything off the grid is dropped.
    #[inline]
    pub fn put_clipped(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return;
        }
        self.set(x as u16, y as u16, ch);
    }

    pub fn clear(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Write `s` left to right from `(x, y)`, stopping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, ch);
            cx += 1;
        }
    }

    /// Row `y` as a string, for tests and diagnostics.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).collect()
    }

    /// Number of cells that differ from `other`. Sizes must match.
    pub fn diff_count(&self, other: &FrameBuffer) -> usize {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_framebuffer_is_blank() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.cells().len(), 12);
        assert!(fb.cells().iter().all(|&c| c == BLANK_GLYPH));
    }

    #[test]
    fn put_clipped_discards_out_of_range() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_clipped(-1, 0, 'x');
        fb.put_clipped(0, -1, 'x');
        fb.put_clipped(3, 0, 'x');
        fb.put_clipped(0, 2, 'x');
        fb.put_clipped(i32::MAX, 0, 'x');
        assert!(fb.cells().iter().all(|&c| c == BLANK_GLYPH));

        fb.put_clipped(2, 1, 'y');
        assert_eq!(fb.get(2, 1), Some('y'));
    }

    #[test]
    fn put_str_stops_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc");
        assert_eq!(fb.row_string(0), "  ab");
    }

    #[test]
    fn diff_count_counts_changed_cells() {
        let a = FrameBuffer::new(3, 3);
        let mut b = a.clone();
        b.set(0, 0, 'a');
        b.set(2, 2, 'b');
        assert_eq!(a.diff_count(&b), 2);
    }
}

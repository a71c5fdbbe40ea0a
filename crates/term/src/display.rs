//! Double-buffered display driver.
//!
//! `current` mirrors what the terminal shows; `next` is repainted from scratch
//! every frame. A flush writes only the cells where the two differ.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Minimal terminal surface the driver writes through.
pub trait DisplayPort {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move the cursor to column `x`, row `y`.
    fn set_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Write one character at the cursor.
    fn write_char(&mut self, ch: char) -> Result<()>;

    /// Current terminal size as `(rows, columns)`.
    fn viewport_size(&mut self) -> Result<(u16, u16)>;

    /// Push buffered output to the device.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        for ch in s.chars() {
            self.write_char(ch)?;
        }
        Ok(())
    }
}

/// Current/next frame pair plus the time of the last flush.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    current: FrameBuffer,
    next: FrameBuffer,
    last_flush_ms: u64,
}

impl DisplayBuffer {
    /// Both frames blank, matching a freshly cleared screen.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            current: FrameBuffer::new(width, height),
            next: FrameBuffer::new(width, height),
            last_flush_ms: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.current.width()
    }

    pub fn height(&self) -> u16 {
        self.current.height()
    }

    /// What the terminal is showing.
    pub fn current(&self) -> &FrameBuffer {
        &self.current
    }

    pub fn next(&self) -> &FrameBuffer {
        &self.next
    }

    /// Scratch frame for the compositor.
    pub fn next_mut(&mut self) -> &mut FrameBuffer {
        &mut self.next
    }

    pub fn last_flush_ms(&self) -> u64 {
        self.last_flush_ms
    }

    /// Whether more than `period_ms` has passed since the last flush.
    pub fn frame_due(&self, now_ms: u64, period_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_flush_ms) > period_ms
    }

    /// Forget what the terminal shows, e.g. after it was cleared externally.
    pub fn invalidate<P: DisplayPort + ?Sized>(&mut self, port: &mut P) -> Result<()> {
        port.clear_screen()?;
        self.current.clear(crate::types::BLANK_GLYPH);
        Ok(())
    }

    /// Write every changed cell and make `current` equal `next`.
    ///
    /// Returns the number of cells written.
    pub fn flush<P: DisplayPort + ?Sized>(&mut self, port: &mut P, now_ms: u64) -> Result<usize> {
        let mut written = 0;
        for y in 0..self.next.height() {
            for x in 0..self.next.width() {
                let (Some(want), Some(have)) = (self.next.get(x, y), self.current.get(x, y)) else {
                    continue;
                };
                if want == have {
                    continue;
                }
                port.set_cursor(x, y)?;
                port.write_char(want)?;
                self.current.set(x, y, want);
                written += 1;
            }
        }
        port.present()?;
        self.last_flush_ms = now_ms;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        moves: Vec<(u16, u16)>,
        chars: Vec<char>,
        presents: usize,
    }

    impl DisplayPort for Recorder {
        fn clear_screen(&mut self) -> Result<()> {
            Ok(())
        }

        fn set_cursor(&mut self, x: u16, y: u16) -> Result<()> {
            self.moves.push((x, y));
            Ok(())
        }

        fn write_char(&mut self, ch: char) -> Result<()> {
            self.chars.push(ch);
            Ok(())
        }

        fn viewport_size(&mut self) -> Result<(u16, u16)> {
            Ok((24, 80))
        }

        fn present(&mut self) -> Result<()> {
            self.presents += 1;
            Ok(())
        }
    }

    #[test]
    fn flush_writes_only_changed_cells() {
        let mut display = DisplayBuffer::new(4, 2);
        display.next_mut().set(1, 0, 'a');
        display.next_mut().set(3, 1, 'b');

        let mut port = Recorder::default();
        assert_eq!(display.flush(&mut port, 10).unwrap(), 2);
        assert_eq!(port.moves, vec![(1, 0), (3, 1)]);
        assert_eq!(port.chars, vec!['a', 'b']);
        assert_eq!(port.presents, 1);
        assert_eq!(display.current(), display.next());
        assert_eq!(display.last_flush_ms(), 10);
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let mut display = DisplayBuffer::new(4, 2);
        display.next_mut().set(0, 0, 'a');
        let mut port = Recorder::default();
        display.flush(&mut port, 1).unwrap();

        let mut port = Recorder::default();
        assert_eq!(display.flush(&mut port, 2).unwrap(), 0);
        assert!(port.moves.is_empty());
    }

    #[test]
    fn frame_due_is_strict() {
        let display = DisplayBuffer::new(1, 1);
        assert!(!display.frame_due(6, 6));
        assert!(display.frame_due(7, 6));
    }

    #[test]
    fn invalidate_forces_repaint() {
        let mut display = DisplayBuffer::new(2, 1);
        display.next_mut().set(0, 0, 'a');
        let mut port = Recorder::default();
        display.flush(&mut port, 1).unwrap();

        display.invalidate(&mut port).unwrap();
        let mut port = Recorder::default();
        assert_eq!(display.flush(&mut port, 2).unwrap(), 1);
    }
}

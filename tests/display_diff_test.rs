use anyhow::Result;

use not_flappy_bird::term::{DisplayBuffer, DisplayPort, FrameBuffer};

#[derive(Default)]
struct RecordingPort {
    cursor: (u16, u16),
    positioned_writes: Vec<(u16, u16, char)>,
}

impl DisplayPort for RecordingPort {
    fn clear_screen(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> Result<()> {
        self.positioned_writes.push((self.cursor.0, self.cursor.1, ch));
        Ok(())
    }

    fn viewport_size(&mut self) -> Result<(u16, u16)> {
        Ok((80, 300))
    }
}

#[test]
fn flush_issues_one_write_per_changed_cell() {
    let mut display = DisplayBuffer::new(300, 80);
    let changes = [(0, 0, 'a'), (299, 0, 'b'), (150, 40, 'c'), (0, 79, 'd'), (299, 79, 'e')];
    for (x, y, ch) in changes {
        display.next_mut().set(x, y, ch);
    }

    let mut port = RecordingPort::default();
    let written = display.flush(&mut port, 100).unwrap();

    assert_eq!(written, changes.len());
    assert_eq!(port.positioned_writes, changes.to_vec());
    assert_eq!(display.current(), display.next());
}

#[test]
fn repeated_flush_only_writes_new_differences() {
    let mut display = DisplayBuffer::new(10, 4);
    let mut port = RecordingPort::default();

    display.next_mut().put_str(0, 0, "hello");
    assert_eq!(display.flush(&mut port, 1).unwrap(), 5);

    // Same frame repainted with one letter changed.
    let next: &mut FrameBuffer = display.next_mut();
    next.clear(' ');
    next.put_str(0, 0, "jello");
    let mut port = RecordingPort::default();
    assert_eq!(display.flush(&mut port, 2).unwrap(), 1);
    assert_eq!(port.positioned_writes, vec![(0, 0, 'j')]);
}

#[test]
fn clearing_cells_writes_blanks() {
    let mut display = DisplayBuffer::new(4, 1);
    let mut port = RecordingPort::default();
    display.next_mut().put_str(0, 0, "ab");
    display.flush(&mut port, 1).unwrap();

    display.next_mut().clear(' ');
    let mut port = RecordingPort::default();
    assert_eq!(display.flush(&mut port, 2).unwrap(), 2);
    assert_eq!(port.positioned_writes, vec![(0, 0, ' '), (1, 0, ' ')]);
}

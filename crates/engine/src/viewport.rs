//! Blocking wait for a large enough terminal.

use std::time::Duration;

use anyhow::Result;

use crate::term::DisplayPort;

/// Poll until the terminal is at least `min_cols` x `min_rows`.
///
/// Between polls a resize prompt is shown and `sleep` is called with
/// `poll_interval`. There is no upper bound on the wait. Returns the
/// accepted `(rows, cols)`.
pub fn wait_for_viewport<P: DisplayPort + ?Sized>(
    display: &mut P,
    min_cols: u16,
    min_rows: u16,
    poll_interval: Duration,
    mut sleep: impl FnMut(Duration),
) -> Result<(u16, u16)> {
    let mut prompted = false;
    loop {
        let (rows, cols) = display.viewport_size()?;
        if cols >= min_cols && rows >= min_rows {
            if prompted {
                display.clear_screen()?;
                display.present()?;
            }
            return Ok((rows, cols));
        }

        if !prompted {
            tracing::info!(cols, rows, min_cols, min_rows, "waiting for console resize");
            prompted = true;
        }

        display.clear_screen()?;
        display.set_cursor(0, 0)?;
        display.write_str(&format!(
            "Please resize the console to at least {min_cols} columns by {min_rows} rows \
             (current size: {cols} columns by {rows} rows)"
        ))?;
        display.present()?;
        sleep(poll_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shrinking {
        sizes: Vec<(u16, u16)>,
        text: String,
        clears: usize,
        prompts: Vec<String>,
    }

    impl DisplayPort for Shrinking {
        fn clear_screen(&mut self) -> Result<()> {
            self.clears += 1;
            self.text.clear();
            Ok(())
        }

        fn set_cursor(&mut self, _x: u16, _y: u16) -> Result<()> {
            Ok(())
        }

        fn write_char(&mut self, ch: char) -> Result<()> {
            self.text.push(ch);
            Ok(())
        }

        fn viewport_size(&mut self) -> Result<(u16, u16)> {
            Ok(if self.sizes.len() > 1 {
                self.sizes.remove(0)
            } else {
                self.sizes[0]
            })
        }

        fn present(&mut self) -> Result<()> {
            if !self.text.is_empty() {
                self.prompts.push(self.text.clone());
            }
            Ok(())
        }
    }

    #[test]
    fn returns_immediately_when_large_enough() {
        let mut port = Shrinking {
            sizes: vec![(80, 300)],
            text: String::new(),
            clears: 0,
            prompts: Vec::new(),
        };
        let mut sleeps = 0;
        let size = wait_for_viewport(&mut port, 300, 80, Duration::from_millis(100), |_| sleeps += 1)
            .unwrap();
        assert_eq!(size, (80, 300));
        assert_eq!(sleeps, 0);
        assert_eq!(port.clears, 0);
    }

    #[test]
    fn polls_until_both_dimensions_fit() {
        let mut port = Shrinking {
            sizes: vec![(24, 80), (80, 200), (79, 300), (81, 320)],
            text: String::new(),
            clears: 0,
            prompts: Vec::new(),
        };
        let mut slept = Vec::new();
        let size =
            wait_for_viewport(&mut port, 300, 80, Duration::from_millis(100), |d| slept.push(d))
                .unwrap();
        assert_eq!(size, (81, 320));
        assert_eq!(slept, vec![Duration::from_millis(100); 3]);
        // Prompt is cleared away once the size fits.
        assert!(port.text.is_empty());
    }

    #[test]
    fn prompt_names_current_size() {
        let mut port = Shrinking {
            sizes: vec![(24, 80), (80, 300)],
            text: String::new(),
            clears: 0,
            prompts: Vec::new(),
        };
        wait_for_viewport(&mut port, 300, 80, Duration::ZERO, |_| {}).unwrap();
        assert_eq!(port.prompts.len(), 1);
        assert!(port.prompts[0].contains("at least 300 columns by 80 rows"));
        assert!(port.prompts[0].contains("current size: 80 columns by 24 rows"));
    }
}

//! Screen rendering
//!
//! Builds the text for each screen into a [`Frame`], then pushes a frame
//! to any [`DisplayDriver`].

use heapless::String;

use super::frame::{Frame, ROWS};
use crate::session::{SessionState, Unit};
use crate::state::{Screen, Topic};
use crate::traits::{DisplayDriver, DisplayError};

/// Scratch line, wider than the panel so formatting never fails early
type Line = String<24>;

/// Screen renderer
pub struct Renderer {
    frame: Frame,
}

impl Renderer {
    /// Create a new renderer
    pub const fn new() -> Self {
        Self {
            frame: Frame::new(),
        }
    }

    /// Render the startup banner
    pub fn render_banner(&mut self, banner: &str) -> &Frame {
        self.frame.clear();
        self.frame.set_line(0, banner);
        &self.frame
    }

    /// Render the active screen
    ///
    /// - `reading`: live sensor value in °C
    pub fn render(&mut self, screen: Screen, session: &SessionState, reading: f32) -> &Frame {
        self.frame.clear();

        match screen {
            Screen::TempScan => self.render_scan(reading, session.unit()),
            Screen::SavedHistory => self.render_history(session),
            Screen::ThresholdView => self.render_thresholds(session),
            Screen::UnitView => self.render_units(reading, session.unit()),
            menu => {
                if let Some(selected) = menu.topic_selected() {
                    self.render_menu(selected);
                }
            }
        }

        &self.frame
    }

    /// Root menu with one item marked
    fn render_menu(&mut self, selected: Topic) {
        for (i, topic) in Topic::ALL.iter().enumerate() {
            let marker = if *topic == selected { '>' } else { ' ' };
            let mut line = Line::new();
            let _ = write_to_string(
                &mut line,
                format_args!("{}{} {}", marker, i + 1, topic.label()),
            );
            self.frame.set_line(i, &line);
        }
    }

    fn render_scan(&mut self, reading: f32, unit: Unit) {
        self.frame.set_line(0, "TempScan");

        let mut line = Line::new();
        let _ = write_to_string(
            &mut line,
            format_args!("T = {:.2} {}", unit.from_celsius(reading), unit.symbol()),
        );
        self.frame.set_line(1, &line);

        self.frame.set_line(3, "R to save");
    }

    /// Label row then value row for each slot
    fn render_history(&mut self, session: &SessionState) {
        let unit = session.unit();
        for (i, sample) in session.samples().iter().enumerate() {
            let mut label = Line::new();
            let _ = write_to_string(&mut label, format_args!("Saved{}", i + 1));
            self.frame.set_line(i * 2, &label);

            let mut value = Line::new();
            let _ = write_to_string(
                &mut value,
                format_args!("{:.2} {}", unit.from_celsius(*sample), unit.symbol()),
            );
            self.frame.set_line(i * 2 + 1, &value);
        }
    }

    /// Bounds are always shown in °C
    fn render_thresholds(&mut self, session: &SessionState) {
        self.frame.set_line(0, "UpperTemp");

        let mut high = Line::new();
        let _ = write_to_string(&mut high, format_args!("> {} C", session.threshold_high()));
        self.frame.set_line(1, &high);

        self.frame.set_line(2, "LowerTemp");

        let mut low = Line::new();
        let _ = write_to_string(&mut low, format_args!("< {} C", session.threshold_low()));
        self.frame.set_line(3, &low);
    }

    fn render_units(&mut self, reading: f32, unit: Unit) {
        self.frame.set_line(0, "C and F");

        let mut celsius = Line::new();
        let _ = write_to_string(&mut celsius, format_args!("C = {:.2}", reading));
        self.frame.set_line(1, &celsius);

        let mut fahrenheit = Line::new();
        let _ = write_to_string(
            &mut fahrenheit,
            format_args!("F = {:.2}", Unit::Fahrenheit.from_celsius(reading)),
        );
        self.frame.set_line(2, &fahrenheit);

        let mut pref = Line::new();
        let _ = write_to_string(&mut pref, format_args!("X unit: {}", unit.symbol()));
        self.frame.set_line(4, &pref);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Push a frame to the panel
///
/// Clears the panel, draws every non-empty row from column 0, then
/// refreshes.
pub fn present<D: DisplayDriver>(frame: &Frame, display: &mut D) -> Result<(), DisplayError> {
    display.clear()?;
    for (row, line) in frame.lines().enumerate().take(ROWS) {
        if !line.is_empty() {
            display.print_string(line, 0, row as u8)?;
        }
    }
    display.refresh()
}

fn write_to_string(s: &mut Line, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_banner() {
        let mut renderer = Renderer::new();
        let frame = renderer.render_banner("Temp Reg Device");
        // 15 characters clip to the 14-column panel
        assert_eq!(frame.line(0), "Temp Reg Devic");
    }

    #[test]
    fn test_render_menu_marks_selection() {
        let mut renderer = Renderer::new();
        let session = SessionState::default();

        let frame = renderer.render(Screen::ThresholdTopic, &session, 20.0);

        assert_eq!(frame.line(0), " 1 CurrentTemp");
        assert_eq!(frame.line(1), " 2 TempHistory");
        assert_eq!(frame.line(2), ">3 FeverLimit");
        assert_eq!(frame.line(3), " 4 Fahrenheit");
    }

    #[test]
    fn test_render_scan() {
        let mut renderer = Renderer::new();
        let mut session = SessionState::default();

        let frame = renderer.render(Screen::TempScan, &session, 23.5);
        assert_eq!(frame.line(0), "TempScan");
        assert_eq!(frame.line(1), "T = 23.50 C");
        assert_eq!(frame.line(3), "R to save");

        session.toggle_unit();
        let frame = renderer.render(Screen::TempScan, &session, 100.0);
        assert_eq!(frame.line(1), "T = 212.00 F");
    }

    #[test]
    fn test_render_history() {
        let mut renderer = Renderer::new();
        let mut session = SessionState::default();
        session.save_sample(36.5);

        let frame = renderer.render(Screen::SavedHistory, &session, 0.0);

        assert_eq!(frame.line(0), "Saved1");
        assert_eq!(frame.line(1), "36.50 C");
        assert_eq!(frame.line(2), "Saved2");
        assert_eq!(frame.line(3), "0.00 C");
        assert_eq!(frame.line(4), "Saved3");

        session.toggle_unit();
        let frame = renderer.render(Screen::SavedHistory, &session, 0.0);

        assert_eq!(frame.line(1), "97.70 F");
        assert_eq!(frame.line(3), "32.00 F");
        assert_eq!(frame.line(5), "32.00 F");
    }

    #[test]
    fn test_render_thresholds_always_celsius() {
        let mut renderer = Renderer::new();
        let mut session = SessionState::default();
        session.toggle_unit();

        let frame = renderer.render(Screen::ThresholdView, &session, 0.0);

        assert_eq!(frame.line(0), "UpperTemp");
        assert_eq!(frame.line(1), "> 39 C");
        assert_eq!(frame.line(2), "LowerTemp");
        assert_eq!(frame.line(3), "< 30 C");
    }

    #[test]
    fn test_render_units() {
        let mut renderer = Renderer::new();
        let session = SessionState::default();

        let frame = renderer.render(Screen::UnitView, &session, 100.0);

        assert_eq!(frame.line(0), "C and F");
        assert_eq!(frame.line(1), "C = 100.00");
        assert_eq!(frame.line(2), "F = 212.00");
        assert_eq!(frame.line(4), "X unit: C");
    }

    /// Records draw calls
    #[derive(Default)]
    struct RecordingDisplay {
        cleared: usize,
        refreshed: usize,
        rows: [Option<(u8, u8)>; ROWS],
        fail_print: bool,
    }

    impl DisplayDriver for RecordingDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.cleared += 1;
            Ok(())
        }

        fn print_string(&mut self, _text: &str, col: u8, row: u8) -> Result<(), DisplayError> {
            if self.fail_print {
                return Err(DisplayError::Bus);
            }
            self.rows[row as usize] = Some((col, row));
            Ok(())
        }

        fn refresh(&mut self) -> Result<(), DisplayError> {
            self.refreshed += 1;
            Ok(())
        }

        fn set_contrast(&mut self, _level: f32) -> Result<(), DisplayError> {
            Ok(())
        }

        fn set_brightness(&mut self, _level: f32) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    #[test]
    fn test_present_skips_blank_rows() {
        let mut renderer = Renderer::new();
        let session = SessionState::default();
        let mut display = RecordingDisplay::default();

        let frame = renderer.render(Screen::TempScan, &session, 20.0);
        present(frame, &mut display).unwrap();

        assert_eq!(display.cleared, 1);
        assert_eq!(display.refreshed, 1);
        assert_eq!(display.rows[0], Some((0, 0)));
        assert_eq!(display.rows[1], Some((0, 1)));
        assert_eq!(display.rows[2], None);
        assert_eq!(display.rows[3], Some((0, 3)));
    }

    #[test]
    fn test_present_propagates_error() {
        let mut renderer = Renderer::new();
        let mut display = RecordingDisplay {
            fail_print: true,
            ..Default::default()
        };

        let frame = renderer.render_banner("hi");
        assert_eq!(present(frame, &mut display), Err(DisplayError::Bus));
        assert_eq!(display.refreshed, 0);
    }
}

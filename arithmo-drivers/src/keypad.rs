//! 4x4 matrix keypad scanner
//!
//! Columns are driven one at a time; rows are read back through
//! pull-downs, so a high row while its column is driven means the key
//! at that intersection is down. One scan reports at most one key; with
//! multiple keys held, the lowest (column, row) position wins.

use embedded_hal::digital::{InputPin, OutputPin};

use arithmo_core::input::KeyEvent;
use arithmo_core::traits::KeySource;

/// Matrix keypad over four column outputs and four row inputs
pub struct MatrixKeypad<C, R> {
    cols: [C; 4],
    rows: [R; 4],
}

impl<C, R> MatrixKeypad<C, R>
where
    C: OutputPin,
    R: InputPin,
{
    /// Create a scanner; all columns are parked low
    pub fn new(mut cols: [C; 4], rows: [R; 4]) -> Self {
        for col in &mut cols {
            let _ = col.set_low();
        }
        Self { cols, rows }
    }

    /// Scan the matrix once
    ///
    /// Non-blocking; pin errors read as "not pressed" (the embassy GPIO
    /// implementations are infallible).
    pub fn scan_once(&mut self) -> KeyEvent {
        for (c, col) in self.cols.iter_mut().enumerate() {
            let _ = col.set_high();
            for (r, row) in self.rows.iter_mut().enumerate() {
                if row.is_high().unwrap_or(false) {
                    let _ = col.set_low();
                    return KeyEvent::pressed_at(r as u8, c as u8);
                }
            }
            let _ = col.set_low();
        }
        KeyEvent::released()
    }
}

impl<C, R> KeySource for MatrixKeypad<C, R>
where
    C: OutputPin,
    R: InputPin,
{
    fn scan(&mut self) -> KeyEvent {
        self.scan_once()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use std::rc::Rc;

    /// Shared matrix fixture: which column is driven, which key is down
    #[derive(Clone, Default)]
    struct Fixture {
        driven_col: Rc<Cell<Option<u8>>>,
        held_key: Rc<Cell<Option<(u8, u8)>>>,
    }

    struct MockCol {
        index: u8,
        fixture: Fixture,
    }

    struct MockRow {
        index: u8,
        fixture: Fixture,
    }

    impl embedded_hal::digital::ErrorType for MockCol {
        type Error = Infallible;
    }

    impl OutputPin for MockCol {
        fn set_low(&mut self) -> Result<(), Infallible> {
            if self.fixture.driven_col.get() == Some(self.index) {
                self.fixture.driven_col.set(None);
            }
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.fixture.driven_col.set(Some(self.index));
            Ok(())
        }
    }

    impl embedded_hal::digital::ErrorType for MockRow {
        type Error = Infallible;
    }

    impl InputPin for MockRow {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            let held = self.fixture.held_key.get();
            let driven = self.fixture.driven_col.get();
            Ok(matches!((held, driven), (Some((r, c)), Some(d)) if r == self.index && c == d))
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            self.is_high().map(|h| !h)
        }
    }

    fn make_keypad(fixture: &Fixture) -> MatrixKeypad<MockCol, MockRow> {
        let cols = core::array::from_fn(|i| MockCol {
            index: i as u8,
            fixture: fixture.clone(),
        });
        let rows = core::array::from_fn(|i| MockRow {
            index: i as u8,
            fixture: fixture.clone(),
        });
        MatrixKeypad::new(cols, rows)
    }

    #[test]
    fn test_idle_scan_reports_released() {
        let fixture = Fixture::default();
        let mut keypad = make_keypad(&fixture);
        assert_eq!(keypad.scan_once(), KeyEvent::released());
    }

    #[test]
    fn test_held_key_found() {
        let fixture = Fixture::default();
        let mut keypad = make_keypad(&fixture);

        fixture.held_key.set(Some((2, 1)));
        assert_eq!(keypad.scan_once(), KeyEvent::pressed_at(2, 1));

        fixture.held_key.set(None);
        assert_eq!(keypad.scan_once(), KeyEvent::released());
    }

    #[test]
    fn test_every_position_scannable() {
        let fixture = Fixture::default();
        let mut keypad = make_keypad(&fixture);

        for row in 0..4u8 {
            for col in 0..4u8 {
                fixture.held_key.set(Some((row, col)));
                assert_eq!(keypad.scan_once(), KeyEvent::pressed_at(row, col));
            }
        }
    }

    #[test]
    fn test_columns_parked_low_after_scan() {
        let fixture = Fixture::default();
        let mut keypad = make_keypad(&fixture);
        keypad.scan_once();
        assert_eq!(fixture.driven_col.get(), None);

        fixture.held_key.set(Some((0, 3)));
        keypad.scan_once();
        assert_eq!(fixture.driven_col.get(), None);
    }
}

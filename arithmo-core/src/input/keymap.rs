//! 4x4 keypad layout
//!
//! Static configuration, not runtime state: each (row, col) position
//! carries the symbol printed on the key cap.

/// One raw scan result from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Whether any key was down during the scan
    pub pressed: bool,
    /// Row index (0-3), valid only when `pressed`
    pub row: u8,
    /// Column index (0-3), valid only when `pressed`
    pub col: u8,
}

impl KeyEvent {
    /// The "nothing is down" scan result
    pub const fn released() -> Self {
        Self {
            pressed: false,
            row: 0,
            col: 0,
        }
    }

    /// A press at the given position
    pub const fn pressed_at(row: u8, col: u8) -> Self {
        Self {
            pressed: true,
            row,
            col,
        }
    }
}

/// Symbol printed on each key of the 4x4 matrix
pub const KEY_MAP: [[char; 4]; 4] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// Look up the symbol at a matrix position
pub fn key_at(row: u8, col: u8) -> Option<char> {
    KEY_MAP
        .get(row as usize)
        .and_then(|r| r.get(col as usize))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_keys() {
        assert_eq!(key_at(0, 0), Some('1'));
        assert_eq!(key_at(0, 3), Some('A'));
        assert_eq!(key_at(3, 0), Some('*'));
        assert_eq!(key_at(3, 3), Some('D'));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(key_at(4, 0), None);
        assert_eq!(key_at(0, 4), None);
    }

    #[test]
    fn test_all_digits_present() {
        let mut digits: heapless::Vec<char, 10> = heapless::Vec::new();
        for row in KEY_MAP.iter() {
            for &ch in row {
                if ch.is_ascii_digit() {
                    let _ = digits.push(ch);
                }
            }
        }
        assert_eq!(digits.len(), 10);
    }
}

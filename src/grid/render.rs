//! Plain-text rendering of grids.

use super::types::Grid;
use std::fmt;

/// Digits used per label when printing a grid with `places` places.
///
/// Equals `ceil(log10(places))`: 1 place needs no padding, 2..=10 places
/// one digit, 11..=100 two digits, and so on.
pub fn label_digits(places: usize) -> usize {
    let mut digits = 0;
    let mut capacity = 1usize;
    while capacity < places {
        capacity = capacity.saturating_mul(10);
        digits += 1;
    }
    digits
}

impl Grid {
    /// Renders the grid one row per line, each label zero-padded to
    /// [`label_digits(places)`](label_digits) and followed by a space.
    ///
    /// ```
    /// use u_partition::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![0, 12], vec![3, 4]]).unwrap();
    /// assert_eq!(grid.render(16), "00 12 \n03 04 \n");
    /// ```
    pub fn render(&self, places: usize) -> String {
        let digits = label_digits(places);
        let mut out = String::with_capacity(self.len() * (digits + 1) + self.height());
        for row in self.rows() {
            for &place in row {
                out.push_str(&format!("{place:0digits$} "));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    /// Pads labels to the width of the largest label present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.max_label().map_or(1, |m| m + 1);
        f.write_str(&self.render(places))
    }
}

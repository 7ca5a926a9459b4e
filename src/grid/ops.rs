//! Region operations: fill, erase, read-back, raw placement, channel-wise
//! copy/paste, and color transforms.
//!
//! Every operation takes a [`RegionSpec`] and treats an entirely-off-grid
//! region as a no-op. Contradictory partial region arguments fail with
//! [`crate::Error::InvalidRegion`] before any cell changes (validate, then
//! mutate).

use super::cell::Rgba;
use super::grid::Grid;
use crate::layout::{Rect, RegionSpec};
use crate::Result;
use bitflags::bitflags;

bitflags! {
    /// Channel selection mask for [`Grid::copy`] and [`Grid::paste`].
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Channels: u8 {
        /// The character channel.
        const CHARS = 0b0000_0001;
        /// The foreground color channel.
        const FG = 0b0000_0010;
        /// The background color channel.
        const BG = 0b0000_0100;
    }
}

impl Channels {
    /// All three channels.
    pub const ALL: Self = Self::all();
}

impl std::fmt::Debug for Channels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Grid {
    /// Resolve a region against this grid's bounds.
    fn region(&self, region: RegionSpec) -> Result<Option<Rect>> {
        region.resolve(self.width, self.height)
    }

    /// Set any of character/foreground/background on every cell in a region.
    ///
    /// Channels passed as `None` are left untouched; in particular
    /// `ch = None` does *not* erase characters ([`Grid::erase`] is the only
    /// character-clearing operation). All three `None` is a no-op.
    pub fn fill(
        &mut self,
        ch: Option<char>,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
        region: RegionSpec,
    ) -> Result<()> {
        let Some(rect) = self.region(region)? else {
            return Ok(());
        };
        if ch.is_none() && fg.is_none() && bg.is_none() {
            return Ok(());
        }
        for (x, y) in rect.cells() {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            let cell = &mut self.cells[idx];
            if ch.is_some() {
                cell.set_character(ch);
            }
            if let Some(fg) = fg {
                cell.set_fg(fg);
            }
            if let Some(bg) = bg {
                cell.set_bg(bg);
            }
            cell.mark_dirty();
        }
        Ok(())
    }

    /// Erase a region to transparent.
    ///
    /// Characters are cleared (the renderer paints nothing, as opposed to a
    /// colored space) and colors reset to the grid's current defaults. The
    /// cursor does not move and no scroll is triggered.
    pub fn erase(&mut self, region: RegionSpec) -> Result<()> {
        let Some(rect) = self.region(region)? else {
            return Ok(());
        };
        let (fg, bg) = (self.default_fg, self.default_bg);
        for (x, y) in rect.cells() {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            let cell = &mut self.cells[idx];
            cell.set_character(None);
            cell.set_fg(fg);
            cell.set_bg(bg);
            cell.mark_dirty();
        }
        Ok(())
    }

    /// Erase `length` cells starting at the cursor, advancing with column
    /// wrap and stopping at the bottom edge.
    ///
    /// The cursor itself does not move and the grid never scrolls.
    pub fn erase_from_cursor(&mut self, length: u32) {
        let (fg, bg) = (self.default_fg, self.default_bg);
        let (mut x, mut y) = self.cursor();
        for _ in 0..length {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            let cell = &mut self.cells[idx];
            cell.set_character(None);
            cell.set_fg(fg);
            cell.set_bg(bg);
            cell.mark_dirty();
            x += 1;
            if x >= self.width {
                x = 0;
                y += 1;
                if y >= self.height {
                    break;
                }
            }
        }
    }

    /// Read back a region's text as one string per row.
    ///
    /// Rows come out top-to-bottom, characters left-to-right, with the gap
    /// character substituted for empty cells. Color information is lost.
    pub fn get_chars(&self, region: RegionSpec) -> Result<Vec<String>> {
        let Some(rect) = self.region(region)? else {
            return Ok(Vec::new());
        };
        let mut rows = Vec::with_capacity(rect.height as usize);
        for y in rect.y..rect.bottom() {
            let mut row = String::with_capacity(rect.width as usize);
            for x in rect.x..rect.right() {
                let idx = (y as usize) * (self.width as usize) + (x as usize);
                row.push(self.cells[idx].character().unwrap_or(self.gap_char));
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// The entire grid as a newline-joined string (color info is lost).
    pub fn read(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height as usize);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for cell in row {
                out.push(cell.character().unwrap_or(self.gap_char));
            }
        }
        out
    }

    /// Write raw characters into a region without moving the cursor.
    ///
    /// Distinct contract from [`Grid::write`]: no cursor movement, no
    /// scrolling, no tab handling. The text is split on line breaks (a
    /// `\r\n` pair is one break), each line is wrapped at the region width,
    /// and writing stops once the region's rows are used up; excess input
    /// is silently dropped. Short lines leave the rest of their row
    /// untouched. Omitted colors fall back to the grid defaults.
    pub fn put_chars(
        &mut self,
        text: &str,
        region: RegionSpec,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
    ) -> Result<()> {
        let Some(rect) = self.region(region)? else {
            return Ok(());
        };
        let fg = fg.unwrap_or(self.default_fg);
        let bg = bg.unwrap_or(self.default_bg);

        let mut row = 0u16;
        'lines: for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut col = 0u16;
            for c in line.chars() {
                if col >= rect.width {
                    // Wrap within the region
                    col = 0;
                    row += 1;
                }
                if row >= rect.height {
                    break 'lines;
                }
                self.put_char(c, rect.x + col, rect.y + row, Some(fg), Some(bg));
                col += 1;
            }
            row += 1;
            if row >= rect.height {
                break;
            }
        }
        Ok(())
    }

    /// Copy the selected channels of a region into a new, independent grid.
    ///
    /// The result has the region's dimensions and this grid's defaults;
    /// unselected channels are left at those defaults. Cell values are
    /// copied, never shared: mutating either grid afterwards cannot affect
    /// the other. Returns `Ok(None)` for an entirely-off-grid region.
    pub fn copy(&self, channels: Channels, region: RegionSpec) -> Result<Option<Self>> {
        let Some(rect) = self.region(region)? else {
            return Ok(None);
        };
        let mut out = Self::new(rect.width, rect.height, self.default_fg, self.default_bg);
        for (x, y) in rect.cells() {
            let src = &self.cells[(y as usize) * (self.width as usize) + (x as usize)];
            let dst_idx = ((y - rect.y) as usize) * (rect.width as usize) + ((x - rect.x) as usize);
            let dst = &mut out.cells[dst_idx];
            if channels.contains(Channels::CHARS) {
                dst.set_character(src.character());
            }
            if channels.contains(Channels::FG) {
                dst.set_fg(src.fg());
            }
            if channels.contains(Channels::BG) {
                dst.set_bg(src.bg());
            }
        }
        Ok(Some(out))
    }

    /// Paste the selected channels of a source grid into a region.
    ///
    /// The source is anchored at the region's top-left corner and clipped to
    /// the smaller of the region and the source. On the character channel,
    /// empty source cells are transparent holes that preserve the
    /// destination; color channels paste every overlapping cell, since a
    /// cell's colors are never unset.
    pub fn paste(&mut self, src: &Self, channels: Channels, region: RegionSpec) -> Result<()> {
        let Some(rect) = self.region(region)? else {
            return Ok(());
        };
        if channels.is_empty() {
            return Ok(());
        }
        let w = rect.width.min(src.width());
        let h = rect.height.min(src.height());
        for sy in 0..h {
            for sx in 0..w {
                let s = &src.cells[(sy as usize) * (src.width as usize) + (sx as usize)];
                let idx = ((rect.y + sy) as usize) * (self.width as usize)
                    + ((rect.x + sx) as usize);
                let d = &mut self.cells[idx];
                let mut touched = false;
                if channels.contains(Channels::CHARS) {
                    if let Some(c) = s.character() {
                        d.set_character(Some(c));
                        touched = true;
                    }
                }
                if channels.contains(Channels::FG) {
                    d.set_fg(s.fg());
                    touched = true;
                }
                if channels.contains(Channels::BG) {
                    d.set_bg(s.bg());
                    touched = true;
                }
                if touched {
                    d.mark_dirty();
                }
            }
        }
        Ok(())
    }

    /// Swap foreground and background on every cell in a region.
    pub fn reverse_colors(&mut self, region: RegionSpec) -> Result<()> {
        self.transform_colors(region, |cell| {
            let (fg, bg) = (cell.fg(), cell.bg());
            cell.set_fg(bg).set_bg(fg);
        })
    }

    /// Channel-wise invert both colors of every cell in a region
    /// (`255 - component`, alpha preserved).
    pub fn invert_colors(&mut self, region: RegionSpec) -> Result<()> {
        self.transform_colors(region, |cell| {
            let (fg, bg) = (cell.fg().invert(), cell.bg().invert());
            cell.set_fg(fg).set_bg(bg);
        })
    }

    /// Channel-wise invert the foreground of every cell in a region.
    pub fn invert_foreground(&mut self, region: RegionSpec) -> Result<()> {
        self.transform_colors(region, |cell| {
            let fg = cell.fg().invert();
            cell.set_fg(fg);
        })
    }

    /// Channel-wise invert the background of every cell in a region.
    pub fn invert_background(&mut self, region: RegionSpec) -> Result<()> {
        self.transform_colors(region, |cell| {
            let bg = cell.bg().invert();
            cell.set_bg(bg);
        })
    }

    /// Brighten both colors of every cell in a region (saturating).
    pub fn lighten(&mut self, amount: u8, region: RegionSpec) -> Result<()> {
        self.transform_colors(region, |cell| {
            let (fg, bg) = (cell.fg().lighten(amount), cell.bg().lighten(amount));
            cell.set_fg(fg).set_bg(bg);
        })
    }

    /// Darken both colors of every cell in a region (saturating).
    pub fn darken(&mut self, amount: u8, region: RegionSpec) -> Result<()> {
        self.transform_colors(region, |cell| {
            let (fg, bg) = (cell.fg().darken(amount), cell.bg().darken(amount));
            cell.set_fg(fg).set_bg(bg);
        })
    }

    /// Apply a color transform to every cell in a region, marking dirty.
    fn transform_colors(
        &mut self,
        region: RegionSpec,
        f: impl Fn(&mut super::cell::Cell),
    ) -> Result<()> {
        let Some(rect) = self.region(region)? else {
            return Ok(());
        };
        for (x, y) in rect.cells() {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            let cell = &mut self.cells[idx];
            f(cell);
            cell.mark_dirty();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn grid() -> Grid {
        Grid::new(10, 5, Rgba::WHITE, Rgba::BLACK)
    }

    #[test]
    fn test_fill_char_and_colors() {
        let mut g = grid();
        g.fill(
            Some('#'),
            Some(Rgba::new(1, 1, 1)),
            None,
            RegionSpec::sized(1, 1, 2, 2),
        )
        .unwrap();
        assert_eq!(g.get_char(1, 1), Some('#'));
        assert_eq!(g.get_char(2, 2), Some('#'));
        assert_eq!(g.cell(2, 2).unwrap().fg(), Rgba::new(1, 1, 1));
        // Untouched channel keeps its value
        assert_eq!(g.cell(2, 2).unwrap().bg(), Rgba::BLACK);
        assert_eq!(g.get_char(3, 3), None);
    }

    #[test]
    fn test_fill_none_char_keeps_characters() {
        let mut g = grid();
        g.write("abc");
        g.fill(None, None, Some(Rgba::new(5, 5, 5)), RegionSpec::full())
            .unwrap();
        assert_eq!(g.get_char(0, 0), Some('a'));
        assert_eq!(g.cell(0, 0).unwrap().bg(), Rgba::new(5, 5, 5));
    }

    #[test]
    fn test_fill_all_none_is_noop() {
        let mut g = grid();
        for cell in g.cells_mut() {
            cell.clear_dirty();
        }
        g.fill(None, None, None, RegionSpec::full()).unwrap();
        assert_eq!(g.dirty_count(), 0);
    }

    #[test]
    fn test_fill_off_grid_is_noop() {
        let mut g = grid();
        g.fill(Some('#'), None, None, RegionSpec::sized(50, 50, 3, 3))
            .unwrap();
        assert_eq!(g.dirty_count(), g.len()); // untouched since construction
        assert_eq!(g.get_char(9, 4), None);
    }

    #[test]
    fn test_fill_invalid_region_errors() {
        let mut g = grid();
        let err = g
            .fill(Some('#'), None, None, RegionSpec::full().with_width(3).with_height(3))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
    }

    #[test]
    fn test_erase_clears_to_transparent() {
        let mut g = grid();
        g.write_with("abcd", Some(Rgba::new(9, 9, 9)), Some(Rgba::new(8, 8, 8)));
        g.erase(RegionSpec::sized(1, 0, 2, 1)).unwrap();
        assert_eq!(g.get_char(0, 0), Some('a'));
        assert_eq!(g.get_char(1, 0), None);
        assert_eq!(g.get_char(2, 0), None);
        assert_eq!(g.get_char(3, 0), Some('d'));
        // Colors reset to the grid defaults
        assert_eq!(g.cell(1, 0).unwrap().bg(), Rgba::BLACK);
        // Erasing is not writing spaces
        assert!(g.cell(1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_erase_from_cursor_wraps_and_stops() {
        let mut g = grid();
        g.fill(Some('#'), None, None, RegionSpec::full()).unwrap();
        g.set_cursor(8, 4).unwrap();
        // Only two cells remain before the bottom-right corner; a longer
        // erase stops there instead of scrolling
        g.erase_from_cursor(10);
        assert_eq!(g.get_char(7, 4), Some('#'));
        assert_eq!(g.get_char(8, 4), None);
        assert_eq!(g.get_char(9, 4), None);
        // Cursor unmoved
        assert_eq!(g.cursor(), (8, 4));
        assert_eq!(g.get_char(0, 0), Some('#'));
    }

    #[test]
    fn test_erase_from_cursor_wraps_columns() {
        let mut g = grid();
        g.fill(Some('#'), None, None, RegionSpec::full()).unwrap();
        g.set_cursor(9, 0).unwrap();
        g.erase_from_cursor(3);
        assert_eq!(g.get_char(9, 0), None);
        assert_eq!(g.get_char(0, 1), None);
        assert_eq!(g.get_char(1, 1), None);
        assert_eq!(g.get_char(2, 1), Some('#'));
    }

    #[test]
    fn test_get_chars_rows_and_gap() {
        let mut g = grid();
        g.write("ab\ncd");
        let rows = g.get_chars(RegionSpec::sized(0, 0, 4, 2)).unwrap();
        assert_eq!(rows, vec!["ab  ".to_string(), "cd  ".to_string()]);
    }

    #[test]
    fn test_get_chars_custom_gap() {
        let mut g = Grid::new(4, 2, Rgba::WHITE, Rgba::BLACK).with_gap_char('.');
        g.write("ab");
        let rows = g.get_chars(RegionSpec::full()).unwrap();
        assert_eq!(rows, vec!["ab..".to_string(), "....".to_string()]);
    }

    #[test]
    fn test_get_chars_off_grid_is_empty() {
        let g = grid();
        assert!(g.get_chars(RegionSpec::at(50, 50)).unwrap().is_empty());
    }

    #[test]
    fn test_read_full_grid() {
        let mut g = Grid::new(3, 2, Rgba::WHITE, Rgba::BLACK);
        g.write("hi");
        assert_eq!(g.read(), "hi \n   ");
    }

    #[test]
    fn test_put_chars_no_cursor_motion() {
        let mut g = grid();
        g.set_cursor(3, 3).unwrap();
        g.put_chars("XY", RegionSpec::sized(0, 0, 5, 2), None, None)
            .unwrap();
        assert_eq!(g.get_char(0, 0), Some('X'));
        assert_eq!(g.get_char(1, 0), Some('Y'));
        assert_eq!(g.cursor(), (3, 3));
    }

    #[test]
    fn test_put_chars_wraps_in_region() {
        let mut g = grid();
        g.put_chars("abcdef", RegionSpec::sized(2, 1, 3, 3), None, None)
            .unwrap();
        assert_eq!(g.get_chars(RegionSpec::sized(2, 1, 3, 2)).unwrap(), vec![
            "abc".to_string(),
            "def".to_string(),
        ]);
        // Nothing leaked outside the region
        assert_eq!(g.get_char(5, 1), None);
        assert_eq!(g.get_char(1, 1), None);
    }

    #[test]
    fn test_put_chars_newlines_and_row_budget() {
        let mut g = grid();
        g.put_chars("ab\ncd\nef\ngh", RegionSpec::sized(0, 0, 5, 3), None, None)
            .unwrap();
        assert_eq!(g.get_char(0, 0), Some('a'));
        assert_eq!(g.get_char(0, 1), Some('c'));
        assert_eq!(g.get_char(0, 2), Some('e'));
        // Fourth row silently dropped
        assert_eq!(g.get_char(0, 3), None);
    }

    #[test]
    fn test_put_chars_crlf_single_break() {
        let mut g = grid();
        g.put_chars("ab\r\ncd", RegionSpec::sized(0, 0, 5, 3), None, None)
            .unwrap();
        assert_eq!(g.get_char(0, 1), Some('c'));
        assert_eq!(g.get_char(0, 2), None);
    }

    #[test]
    fn test_put_chars_short_line_preserves_row() {
        let mut g = grid();
        g.put_char('Z', 3, 0, None, None);
        g.put_chars("a", RegionSpec::sized(0, 0, 5, 1), None, None)
            .unwrap();
        assert_eq!(g.get_char(3, 0), Some('Z'));
    }

    #[test]
    fn test_copy_selected_channels() {
        let mut g = grid();
        g.write_with("ab", Some(Rgba::new(9, 9, 9)), Some(Rgba::new(8, 8, 8)));
        let copy = g
            .copy(Channels::CHARS, RegionSpec::sized(0, 0, 2, 1))
            .unwrap()
            .unwrap();
        assert_eq!(copy.size(), (2, 1));
        assert_eq!(copy.get_char(0, 0), Some('a'));
        // Unselected channels sit at the copy's defaults
        assert_eq!(copy.cell(0, 0).unwrap().fg(), Rgba::WHITE);
        assert_eq!(copy.cell(0, 0).unwrap().bg(), Rgba::BLACK);
    }

    #[test]
    fn test_copy_independence() {
        let mut g = grid();
        g.write("ab");
        let copy = g.copy(Channels::ALL, RegionSpec::sized(0, 0, 2, 1)).unwrap().unwrap();
        // Mutating the source afterwards must not leak into the copy
        g.fill(Some('!'), Some(Rgba::new(1, 1, 1)), None, RegionSpec::full())
            .unwrap();
        assert_eq!(copy.get_char(0, 0), Some('a'));
        assert_eq!(copy.get_char(1, 0), Some('b'));
        assert_eq!(copy.cell(0, 0).unwrap().fg(), Rgba::WHITE);
    }

    #[test]
    fn test_copy_off_grid_is_none() {
        let g = grid();
        assert!(g.copy(Channels::ALL, RegionSpec::at(99, 99)).unwrap().is_none());
    }

    #[test]
    fn test_paste_chars_with_holes() {
        let mut g = grid();
        g.fill(Some('.'), None, None, RegionSpec::full()).unwrap();

        let mut src = Grid::new(3, 1, Rgba::WHITE, Rgba::BLACK);
        src.put_char('A', 0, 0, None, None);
        src.put_char('C', 2, 0, None, None);
        // src cell (1, 0) stays empty: a transparent hole

        g.paste(&src, Channels::CHARS, RegionSpec::at(2, 2)).unwrap();
        assert_eq!(g.get_char(2, 2), Some('A'));
        assert_eq!(g.get_char(3, 2), Some('.'));
        assert_eq!(g.get_char(4, 2), Some('C'));
    }

    #[test]
    fn test_paste_clips_to_region_and_source() {
        let mut g = grid();
        let mut src = Grid::new(4, 4, Rgba::WHITE, Rgba::BLACK);
        src.fill(Some('#'), None, None, RegionSpec::full()).unwrap();
        // Region is 2x2; only that much of the source lands
        g.paste(&src, Channels::CHARS, RegionSpec::sized(0, 0, 2, 2))
            .unwrap();
        assert_eq!(g.get_char(1, 1), Some('#'));
        assert_eq!(g.get_char(2, 0), None);
        assert_eq!(g.get_char(0, 2), None);
    }

    #[test]
    fn test_paste_color_channel_is_total() {
        let mut g = grid();
        let src = Grid::new(2, 1, Rgba::new(3, 3, 3), Rgba::new(4, 4, 4));
        // Empty source cells still carry concrete colors
        g.paste(&src, Channels::FG | Channels::BG, RegionSpec::at(0, 0))
            .unwrap();
        assert_eq!(g.cell(0, 0).unwrap().fg(), Rgba::new(3, 3, 3));
        assert_eq!(g.cell(0, 0).unwrap().bg(), Rgba::new(4, 4, 4));
        // Character untouched by a color-only paste
        assert_eq!(g.get_char(0, 0), None);
    }

    #[test]
    fn test_paste_anchored_at_region_origin() {
        let mut g = grid();
        let mut src = Grid::new(2, 2, Rgba::WHITE, Rgba::BLACK);
        src.fill(Some('#'), None, None, RegionSpec::full()).unwrap();
        g.paste(&src, Channels::CHARS, RegionSpec::sized(8, 3, 5, 5))
            .unwrap();
        // Clipped region at (8, 3) is 2x2 anyway
        assert_eq!(g.get_char(8, 3), Some('#'));
        assert_eq!(g.get_char(9, 4), Some('#'));
    }

    #[test]
    fn test_reverse_colors_swaps() {
        let mut g = grid();
        g.reverse_colors(RegionSpec::at(0, 0)).unwrap();
        let cell = g.cell(0, 0).unwrap();
        assert_eq!(cell.fg(), Rgba::BLACK);
        assert_eq!(cell.bg(), Rgba::WHITE);
    }

    #[test]
    fn test_invert_idempotence() {
        let mut g = grid();
        g.write_with("xy", Some(Rgba::new(10, 20, 30)), Some(Rgba::with_alpha(1, 2, 3, 77)));
        let before: Vec<_> = g.cells().iter().map(|c| (c.fg(), c.bg())).collect();
        g.invert_colors(RegionSpec::full()).unwrap();
        g.invert_colors(RegionSpec::full()).unwrap();
        let after: Vec<_> = g.cells().iter().map(|c| (c.fg(), c.bg())).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_invert_single_channel() {
        let mut g = grid();
        g.invert_foreground(RegionSpec::at(0, 0)).unwrap();
        let cell = g.cell(0, 0).unwrap();
        // White foreground inverts to black; background untouched
        assert_eq!(cell.fg(), Rgba::new(0, 0, 0));
        assert_eq!(cell.bg(), Rgba::BLACK);
    }

    #[test]
    fn test_invert_preserves_alpha() {
        let mut g = grid();
        g.fill(None, Some(Rgba::with_alpha(10, 10, 10, 42)), None, RegionSpec::at(0, 0))
            .unwrap();
        g.invert_foreground(RegionSpec::at(0, 0)).unwrap();
        assert_eq!(g.cell(0, 0).unwrap().fg(), Rgba::with_alpha(245, 245, 245, 42));
    }

    #[test]
    fn test_lighten_darken() {
        let mut g = grid();
        g.fill(None, Some(Rgba::new(100, 200, 250)), None, RegionSpec::at(0, 0))
            .unwrap();
        g.lighten(10, RegionSpec::at(0, 0)).unwrap();
        assert_eq!(g.cell(0, 0).unwrap().fg(), Rgba::new(110, 210, 255));
        g.darken(20, RegionSpec::at(0, 0)).unwrap();
        assert_eq!(g.cell(0, 0).unwrap().fg(), Rgba::new(90, 190, 235));
    }

    #[test]
    fn test_color_ops_mark_dirty() {
        let mut g = grid();
        for cell in g.cells_mut() {
            cell.clear_dirty();
        }
        g.invert_colors(RegionSpec::sized(0, 0, 2, 2)).unwrap();
        assert_eq!(g.dirty_count(), 4);
    }
}

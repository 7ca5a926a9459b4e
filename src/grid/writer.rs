//! Text-writing engine: cursor-driven character insertion.
//!
//! `write` feeds characters through a small state machine: printable glyphs
//! land at the cursor and advance it, tabs expand with spaces to the next
//! stop, `\n`/`\r` (and the `\r\n` pair, counted once) break the line, and
//! anything outside printable ASCII becomes `?`.
//!
//! Scrolling is deferred: walking the cursor off the bottom edge only arms a
//! pending scroll, and the grid shifts when the next glyph actually lands.
//! Writing exactly `height` full lines therefore leaves the last line on the
//! bottom row instead of scrolling a blank row into view.

use super::cell::{Cell, Rgba};
use super::grid::Grid;
use std::fmt;

impl Grid {
    /// Write text at the cursor using the grid's default colors.
    ///
    /// See [`Grid::write_with`] for the full contract.
    pub fn write(&mut self, text: &str) {
        self.write_with(text, None, None);
    }

    /// Write text at the cursor with optional color overrides.
    ///
    /// - Omitted colors fall back to the grid defaults.
    /// - `\t` expands with spaces to the next multiple of the tab width,
    ///   measured from the start-of-line column; the expansion is truncated
    ///   at the right edge rather than spilling into the next row.
    /// - `\n` and `\r` move the cursor to column 0 of the next row; `\r\n`
    ///   counts as a single line break.
    /// - Characters outside printable ASCII 32-127 are written as `?`.
    /// - The column wraps at the right edge; advancing past the last row
    ///   scrolls the grid up one row and pins the cursor to the bottom.
    pub fn write_with(&mut self, text: &str, fg: Option<Rgba>, bg: Option<Rgba>) {
        let fg = fg.unwrap_or(self.default_fg);
        let bg = bg.unwrap_or(self.default_bg);

        let mut prev_was_cr = false;
        for c in text.chars() {
            match c {
                '\n' if prev_was_cr => {
                    // The carriage return already broke this line
                    prev_was_cr = false;
                }
                '\n' | '\r' => {
                    prev_was_cr = c == '\r';
                    self.line_break();
                }
                '\t' => {
                    prev_was_cr = false;
                    self.expand_tab(fg, bg);
                }
                c => {
                    prev_was_cr = false;
                    self.put_at_cursor(c, fg, bg);
                }
            }
        }
    }

    /// Stringify a value, append a newline, and write it at the cursor.
    pub fn print(&mut self, value: impl fmt::Display) {
        self.write(&format!("{value}\n"));
    }

    /// Stringify several values joined by `sep`, append `end`, and write the
    /// result at the cursor with optional color overrides.
    pub fn print_all(
        &mut self,
        values: &[&dyn fmt::Display],
        sep: &str,
        end: &str,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
    ) {
        let mut text = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                text.push_str(sep);
            }
            let _ = fmt::Write::write_fmt(&mut text, format_args!("{value}"));
        }
        text.push_str(end);
        self.write_with(&text, fg, bg);
    }

    /// Place one glyph at the cursor and advance.
    ///
    /// Commits a pending scroll first, so the glyph always lands in bounds.
    fn put_at_cursor(&mut self, c: char, fg: Rgba, bg: Rgba) {
        if self.scroll_pending {
            self.scroll_up();
            self.scroll_pending = false;
        }
        let idx = (self.cursor_y as usize) * (self.width as usize) + (self.cursor_x as usize);
        self.cells[idx] = Cell::new(c, fg, bg);
        self.cursor_x += 1;
        if self.cursor_x >= self.width {
            self.cursor_x = 0;
            self.advance_row();
        }
    }

    /// Move the cursor to column 0 of the next row.
    fn line_break(&mut self) {
        self.cursor_x = 0;
        if self.scroll_pending {
            self.scroll_up();
        }
        self.advance_row();
    }

    /// Step the cursor down one row, arming a scroll at the bottom edge.
    fn advance_row(&mut self) {
        if self.cursor_y + 1 >= self.height {
            self.scroll_pending = true;
        } else {
            self.cursor_y += 1;
        }
    }

    /// Expand a tab with spaces up to the next stop, truncated at the edge.
    fn expand_tab(&mut self, fg: Rgba, bg: Rgba) {
        let next_stop =
            ((u32::from(self.cursor_x) / u32::from(self.tab_width)) + 1) * u32::from(self.tab_width);
        #[allow(clippy::cast_possible_truncation)]
        let stop = next_stop.min(u32::from(self.width)) as u16;
        for _ in self.cursor_x..stop {
            self.put_at_cursor(' ', fg, bg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 3, Rgba::BLACK, Rgba::SILVER)
    }

    fn row_text(g: &Grid, y: u16) -> String {
        (0..g.width())
            .map(|x| g.get_char(x, y).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_write_read_roundtrip() {
        let mut g = grid();
        g.write("pancake");
        assert_eq!(row_text(&g, 0), "pancake   ");
        assert_eq!(g.cursor(), (7, 0));
    }

    #[test]
    fn test_hello_world_scenario() {
        // 10x3, black on silver: two lines, cursor ends after "World"
        let mut g = grid();
        g.write("Hello\nWorld");
        assert_eq!(row_text(&g, 0), "Hello     ");
        assert_eq!(row_text(&g, 1), "World     ");
        assert_eq!(g.cursor(), (5, 1));
        let cell = g.cell(0, 0).unwrap();
        assert_eq!(cell.fg(), Rgba::BLACK);
        assert_eq!(cell.bg(), Rgba::SILVER);
    }

    #[test]
    fn test_write_marks_dirty() {
        let mut g = grid();
        g.mark_all_dirty();
        for cell in g.cells_mut() {
            cell.clear_dirty();
        }
        g.write("ab");
        assert_eq!(g.dirty_count(), 2);
    }

    #[test]
    fn test_write_explicit_colors() {
        let mut g = grid();
        g.write_with("x", Some(Rgba::new(1, 2, 3)), None);
        let cell = g.cell(0, 0).unwrap();
        assert_eq!(cell.fg(), Rgba::new(1, 2, 3));
        assert_eq!(cell.bg(), Rgba::SILVER);
    }

    #[test]
    fn test_unprintable_substitution() {
        let mut g = grid();
        g.write("a\u{1}b\u{80}");
        assert_eq!(row_text(&g, 0), "a?b?      ");
    }

    #[test]
    fn test_column_wrap() {
        let mut g = grid();
        g.write("0123456789AB");
        assert_eq!(row_text(&g, 0), "0123456789");
        assert_eq!(row_text(&g, 1), "AB        ");
        assert_eq!(g.cursor(), (2, 1));
    }

    #[test]
    fn test_crlf_is_one_line_break() {
        let mut g = grid();
        g.write("a\r\nb");
        assert_eq!(g.get_char(0, 0), Some('a'));
        assert_eq!(g.get_char(0, 1), Some('b'));
        assert_eq!(g.cursor(), (1, 1));
    }

    #[test]
    fn test_bare_cr_and_lf_each_break() {
        let mut g = grid();
        g.write("a\rb\nc");
        assert_eq!(g.get_char(0, 0), Some('a'));
        assert_eq!(g.get_char(0, 1), Some('b'));
        assert_eq!(g.get_char(0, 2), Some('c'));
    }

    #[test]
    fn test_lf_cr_is_two_breaks() {
        let mut g = grid();
        g.write("a\n\rb");
        assert_eq!(g.get_char(0, 0), Some('a'));
        assert_eq!(g.get_char(0, 2), Some('b'));
    }

    #[test]
    fn test_tab_expansion_from_line_start() {
        let mut g = Grid::new(20, 3, Rgba::BLACK, Rgba::SILVER);
        g.write("a\tb");
        // Next stop after column 1 is column 8
        assert_eq!(g.get_char(0, 0), Some('a'));
        assert_eq!(g.get_char(8, 0), Some('b'));
        for x in 1..8 {
            assert_eq!(g.get_char(x, 0), Some(' '));
        }
    }

    #[test]
    fn test_tab_at_stop_advances_full_width() {
        let mut g = Grid::new(20, 3, Rgba::BLACK, Rgba::SILVER);
        g.write("12345678\tx");
        // Cursor sat exactly on a stop; the tab jumps a full interval
        assert_eq!(g.get_char(16, 0), Some('x'));
    }

    #[test]
    fn test_tab_truncated_at_right_edge() {
        let mut g = grid();
        g.write("123456789\tx");
        // Expansion from column 9 is clamped to the edge: one space, then
        // the cursor wraps and 'x' starts the next row
        assert_eq!(g.get_char(9, 0), Some(' '));
        assert_eq!(g.get_char(0, 1), Some('x'));
    }

    #[test]
    fn test_custom_tab_width() {
        let mut g = Grid::new(20, 3, Rgba::BLACK, Rgba::SILVER).with_tab_width(4);
        g.write("ab\tc");
        assert_eq!(g.get_char(4, 0), Some('c'));
    }

    #[test]
    fn test_scroll_on_overflow() {
        // height + 1 newline-terminated lines: the first scrolls away and
        // the last occupies the bottom row
        let mut g = grid();
        g.write("one\n");
        g.write("two\n");
        g.write("three\n");
        g.write("four\n");
        assert_eq!(row_text(&g, 0), "two       ");
        assert_eq!(row_text(&g, 1), "three     ");
        assert_eq!(row_text(&g, 2), "four      ");
        assert_eq!(g.cursor(), (0, 2));
    }

    #[test]
    fn test_trailing_newline_does_not_scroll_early() {
        let mut g = grid();
        g.write("one\ntwo\nthree\n");
        // Three lines exactly fill the grid; the pending break has not
        // scrolled anything yet
        assert_eq!(row_text(&g, 0), "one       ");
        assert_eq!(row_text(&g, 2), "three     ");
        // The next glyph commits the scroll
        g.write("x");
        assert_eq!(row_text(&g, 0), "two       ");
        assert_eq!(row_text(&g, 2), "x         ");
    }

    #[test]
    fn test_wrap_at_bottom_right_defers_scroll() {
        let mut g = grid();
        g.set_cursor(0, 2).unwrap();
        g.write("0123456789");
        // The full bottom row is written; nothing scrolled yet
        assert_eq!(row_text(&g, 2), "0123456789");
        g.write("!");
        assert_eq!(row_text(&g, 1), "0123456789");
        assert_eq!(row_text(&g, 2), "!         ");
    }

    #[test]
    fn test_explicit_cursor_set_disarms_scroll() {
        let mut g = grid();
        g.write("one\ntwo\nthree\n");
        g.set_cursor(0, 0).unwrap();
        g.write("X");
        // The pending scroll was cancelled by the cursor set
        assert_eq!(row_text(&g, 0), "Xne       ");
        assert_eq!(row_text(&g, 2), "three     ");
    }

    #[test]
    fn test_print_appends_newline() {
        let mut g = grid();
        g.print("hi");
        assert_eq!(row_text(&g, 0), "hi        ");
        assert_eq!(g.cursor(), (0, 1));
    }

    #[test]
    fn test_print_stringifies() {
        let mut g = grid();
        g.print(42);
        assert_eq!(row_text(&g, 0), "42        ");
    }

    #[test]
    fn test_print_all_sep_and_end() {
        let mut g = grid();
        g.print_all(&[&1, &"up"], "-", "!", None, None);
        assert_eq!(row_text(&g, 0), "1-up!     ");
        assert_eq!(g.cursor(), (5, 0));
    }
}

//! Painting of menus and confirmation prompts.
//!
//! The renderer draws inline (no alternate screen). A redraw cycle moves the
//! cursor up over the previously painted lines, clearing each, and paints
//! again from the same position. The static header is painted once per
//! session and is not part of the redraw cycle.
//!
//! Option lines wider than the terminal are truncated with `…`, so every
//! painted line occupies exactly one terminal row and erasing by line count
//! stays exact.

use std::borrow::Cow;
use std::io::Write;

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::SelectorConfig;
use crate::error::Result;
use crate::session::{Mode, Session, CONFIRM_LABELS};

// Output happens while the terminal is raw, where `\n` alone does not return
// the carriage.
const RAW_NEWLINE: &str = "\r\n";
const COOKED_NEWLINE: &str = "\n";

const MARKER: &str = "▶";
const SELECTED_INDENT: &str = "  ";
const OPTION_INDENT: &str = "    ";
const ELLIPSIS: char = '…';
const TAB_STOP: usize = 8;
const CONTROL_REPLACEMENT: char = '?';
const CANCELLED_NOTICE: &str = "Operation cancelled";
const AUTO_SELECTED_NOTICE: &str = "(auto-selected)";

const CONFIRM_TOP: &str = "╭─ ";
const CONFIRM_SPINE: &str = "│";
const CONFIRM_BOTTOM: &str = "╰─ ";

type Segment<'a> = (Option<Color>, &'a str);

pub struct Renderer<W> {
    out: W,
    config: SelectorConfig,
    width: Option<u16>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, config: SelectorConfig) -> Self {
        Self {
            out,
            config,
            width: None,
        }
    }

    /// Sets the terminal width used for truncation. `None` disables it.
    #[must_use]
    pub fn with_width(mut self, width: Option<u16>) -> Self {
        self.width = width;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Paints the static header and returns the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn paint_header(&mut self, session: &Session) -> Result<usize> {
        let lines = match session.mode() {
            Mode::Menu => {
                let prompt_lines = self.write_prompt(session.prompt(), "", RAW_NEWLINE)?;
                self.write_line(&[], RAW_NEWLINE)?;
                prompt_lines + 1
            }
            Mode::Confirm => {
                let prompt_lines = self.write_prompt(session.prompt(), CONFIRM_TOP, RAW_NEWLINE)?;
                self.write_line(&[(None, CONFIRM_SPINE)], RAW_NEWLINE)?;
                prompt_lines + 1
            }
        };

        self.out.flush()?;
        Ok(lines)
    }

    /// Paints the redrawable body of the session and returns the number of
    /// lines written, counting every line of a multi-line option.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn paint(&mut self, session: &Session) -> Result<usize> {
        let lines = match session.mode() {
            Mode::Menu => self.paint_options(session)?,
            Mode::Confirm => {
                self.paint_confirm_line(session.is_yes(), Color::Blue)?;
                1
            }
        };

        self.out.flush()?;
        Ok(lines)
    }

    /// Moves up over `line_count` lines, clearing each one, leaving the cursor
    /// where the erased paint began.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn erase(&mut self, line_count: usize) -> Result<()> {
        if line_count == 0 {
            return Ok(());
        }

        for _ in 0..line_count {
            queue!(self.out, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Paints the final answer in place of the erased session.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn paint_selected(&mut self, session: &Session) -> Result<()> {
        match session.mode() {
            Mode::Menu => {
                self.write_prompt(session.prompt(), "", RAW_NEWLINE)?;
                for line in session.selected_text().split('\n') {
                    let line = format!("{MARKER} {}", self.fit(line, 2));
                    self.write_line(&[(Some(Color::Green), line.as_str())], RAW_NEWLINE)?;
                }
                self.write_line(&[], RAW_NEWLINE)?;
            }
            Mode::Confirm => {
                self.write_prompt(session.prompt(), CONFIRM_TOP, RAW_NEWLINE)?;
                self.write_line(&[(None, CONFIRM_SPINE)], RAW_NEWLINE)?;
                self.paint_confirm_line(session.is_yes(), Color::Green)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Paints the cancellation notice in place of the erased session.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn paint_cancelled(&mut self, session: &Session) -> Result<()> {
        match session.mode() {
            Mode::Menu => {
                self.write_line(&[(Some(Color::Yellow), CANCELLED_NOTICE)], RAW_NEWLINE)?;
            }
            Mode::Confirm => {
                self.write_prompt(session.prompt(), CONFIRM_TOP, RAW_NEWLINE)?;
                self.write_line(&[(None, CONFIRM_SPINE)], RAW_NEWLINE)?;
                self.write_line(
                    &[
                        (None, CONFIRM_BOTTOM),
                        (Some(Color::Yellow), CANCELLED_NOTICE),
                    ],
                    RAW_NEWLINE,
                )?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Writes the notice shown when no terminal is available and the default
    /// was taken without asking.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn paint_auto_selected(&mut self, prompt: &str, text: &str) -> Result<()> {
        self.write_prompt(prompt, "", COOKED_NEWLINE)?;
        let choice = format!("{MARKER} {text}");
        self.write_line(
            &[
                (Some(Color::Green), choice.as_str()),
                (None, " "),
                (None, AUTO_SELECTED_NOTICE),
            ],
            COOKED_NEWLINE,
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Confirmation counterpart of [`Renderer::paint_auto_selected`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn paint_auto_confirmed(&mut self, prompt: &str, answer: bool) -> Result<()> {
        let (color, label) = if answer {
            (Color::Green, CONFIRM_LABELS[0])
        } else {
            (Color::Red, CONFIRM_LABELS[1])
        };

        self.write_prompt(prompt, "", COOKED_NEWLINE)?;
        let choice = format!("{MARKER} {label}");
        self.write_line(
            &[(Some(color), choice.as_str()), (None, " "), (None, AUTO_SELECTED_NOTICE)],
            COOKED_NEWLINE,
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn paint_options(&mut self, session: &Session) -> Result<usize> {
        let indent = OPTION_INDENT.width();
        let mut lines = 0;

        for (index, option) in session.options().iter().enumerate() {
            let is_selected = index == session.cursor();

            for (line_number, line) in option.split('\n').enumerate() {
                let text = self.fit(line, indent);
                match (is_selected, line_number) {
                    (true, 0) => self.write_line(
                        &[
                            (None, SELECTED_INDENT),
                            (Some(Color::Blue), MARKER),
                            (None, " "),
                            (Some(Color::Cyan), &*text),
                        ],
                        RAW_NEWLINE,
                    )?,
                    (true, _) => self.write_line(
                        &[(None, OPTION_INDENT), (Some(Color::Cyan), &*text)],
                        RAW_NEWLINE,
                    )?,
                    (false, _) => {
                        self.write_line(&[(None, OPTION_INDENT), (None, &*text)], RAW_NEWLINE)?;
                    }
                }
                lines += 1;
            }
        }

        let separator = "─".repeat(self.separator_width());
        self.write_line(&[], RAW_NEWLINE)?;
        self.write_line(&[(Some(Color::DarkGrey), separator.as_str())], RAW_NEWLINE)?;

        Ok(lines + 2)
    }

    fn paint_confirm_line(&mut self, is_yes: bool, marker_color: Color) -> Result<()> {
        let [yes, no] = CONFIRM_LABELS;
        let unselected_yes = format!("○ {yes} / ");
        let unselected_no = format!(" / ○ {no}");
        let selected_yes = format!(" {yes}");
        let selected_no = format!(" {no}");

        let segments: [Segment<'_>; 4] = if is_yes {
            [
                (None, CONFIRM_BOTTOM),
                (Some(marker_color), "●"),
                (None, selected_yes.as_str()),
                (Some(Color::Cyan), unselected_no.as_str()),
            ]
        } else {
            [
                (None, CONFIRM_BOTTOM),
                (Some(Color::Cyan), unselected_yes.as_str()),
                (Some(marker_color), "●"),
                (None, selected_no.as_str()),
            ]
        };

        self.write_line(&segments, RAW_NEWLINE)
    }

    fn write_prompt(&mut self, prompt: &str, prefix: &str, newline: &str) -> Result<usize> {
        let indent = prefix.width();
        let continuation = " ".repeat(indent);
        let mut lines = 0;

        for (line_number, line) in prompt.split('\n').enumerate() {
            let text = self.fit(line, indent);
            let lead = if line_number == 0 { prefix } else { continuation.as_str() };
            self.write_line(&[(None, lead), (None, &*text)], newline)?;
            lines += 1;
        }

        Ok(lines)
    }

    fn write_line(&mut self, segments: &[Segment<'_>], newline: &str) -> Result<()> {
        for (color, text) in segments {
            match color {
                Some(color) if self.config.color => {
                    queue!(self.out, SetForegroundColor(*color), Print(text), ResetColor)?;
                }
                _ => queue!(self.out, Print(text))?,
            }
        }

        queue!(self.out, Print(newline))?;
        Ok(())
    }

    fn separator_width(&self) -> usize {
        match self.width {
            Some(width) => self
                .config
                .separator_width
                .min(usize::from(width).saturating_sub(1)),
            None => self.config.separator_width,
        }
    }

    fn fit<'a>(&self, text: &'a str, indent: usize) -> Cow<'a, str> {
        match self.width {
            // Leave the last column free so no line triggers an auto-wrap.
            Some(width) => {
                fit_from_column(text, indent, usize::from(width).saturating_sub(indent + 1))
            }
            None => expand_control_chars(text, indent),
        }
    }
}

/// Truncates `text` to at most `available` display columns, ending it with
/// `…` when anything was cut. Tabs and other control characters are expanded
/// first, as by [`expand_control_chars`] from column 0.
#[must_use]
pub fn fit_to_width(text: &str, available: usize) -> Cow<'_, str> {
    fit_from_column(text, 0, available)
}

/// Replaces tabs with spaces up to the next tab stop, counting columns from
/// `start_column`, and every other control character with `?`. The result's
/// display width is what a terminal actually draws.
#[must_use]
pub fn expand_control_chars(text: &str, start_column: usize) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut expanded = String::with_capacity(text.len());
    let mut column = start_column;
    for c in text.chars() {
        if c == '\t' {
            let spaces = TAB_STOP - column % TAB_STOP;
            expanded.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else if c.is_control() {
            expanded.push(CONTROL_REPLACEMENT);
            column += 1;
        } else {
            expanded.push(c);
            column += c.width().unwrap_or(0);
        }
    }

    Cow::Owned(expanded)
}

fn fit_from_column(text: &str, start_column: usize, available: usize) -> Cow<'_, str> {
    let text = expand_control_chars(text, start_column);
    if text.width() <= available {
        return text;
    }

    if available == 0 {
        return Cow::Owned(String::new());
    }

    let budget = available - 1;
    let mut used = 0;
    let mut fitted = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        fitted.push(c);
    }
    fitted.push(ELLIPSIS);

    Cow::Owned(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERASE_LINE: &str = "\x1b[1A\x1b[2K";

    fn renderer() -> Renderer<Vec<u8>> {
        Renderer::new(Vec::new(), SelectorConfig::default().without_color())
    }

    fn output(renderer: &Renderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.get_ref().clone()).unwrap()
    }

    fn greek(cursor: usize) -> Session {
        Session::menu("Pick one", &["alpha", "beta", "gamma"], cursor).unwrap()
    }

    #[test]
    fn test_menu_header_line_count() {
        let mut renderer = renderer();
        assert_eq!(renderer.paint_header(&greek(0)).unwrap(), 2);
        assert_eq!(output(&renderer), "Pick one\r\n\r\n");
    }

    #[test]
    fn test_multi_line_prompt_counts_every_line() {
        let mut renderer = renderer();
        let session = Session::menu("Shell\nchoose one", &["bash"], 0).unwrap();
        assert_eq!(renderer.paint_header(&session).unwrap(), 3);
    }

    #[test]
    fn test_menu_paint_marks_cursor() {
        let mut renderer = renderer();
        let lines = renderer.paint(&greek(1)).unwrap();
        assert_eq!(lines, 5);

        let painted = output(&renderer);
        let rows: Vec<&str> = painted.split("\r\n").collect();
        assert_eq!(rows[0], "    alpha");
        assert_eq!(rows[1], "  ▶ beta");
        assert_eq!(rows[2], "    gamma");
        assert_eq!(rows[3], "");
        assert_eq!(rows[4], "─".repeat(78));
    }

    #[test]
    fn test_multi_line_option_counts_extra_lines() {
        let mut renderer = renderer();
        let session = Session::menu("Pick", &["one", "two\nlines", "three\nmore\nlines"], 0).unwrap();
        assert_eq!(renderer.paint(&session).unwrap(), 6 + 2);
    }

    #[test]
    fn test_erase_moves_up_and_clears_each_line() {
        let mut renderer = renderer();
        renderer.erase(3).unwrap();
        assert_eq!(output(&renderer), ERASE_LINE.repeat(3));
    }

    #[test]
    fn test_erase_zero_is_noop() {
        let mut renderer = renderer();
        renderer.erase(0).unwrap();
        assert!(renderer.get_ref().is_empty());
    }

    #[test]
    fn test_redraw_cycle_is_idempotent() {
        let mut renderer = renderer();
        let mut session = greek(2);

        let first = renderer.paint(&session).unwrap();
        session.record_paint(first);
        let first_output = output(&renderer);

        for _ in 0..3 {
            renderer.get_mut().clear();
            renderer.erase(session.last_rendered_line_count()).unwrap();
            let lines = renderer.paint(&session).unwrap();
            session.record_paint(lines);

            assert_eq!(session.last_rendered_line_count(), first);
            let cycle = output(&renderer);
            assert_eq!(cycle, format!("{}{first_output}", ERASE_LINE.repeat(first)));
        }
    }

    #[test]
    fn test_confirm_paint_is_one_line() {
        let mut renderer = renderer();
        let session = Session::confirm("proceed?", true);
        assert_eq!(renderer.paint_header(&session).unwrap(), 2);
        assert_eq!(renderer.paint(&session).unwrap(), 1);
        assert_eq!(output(&renderer), "╭─ proceed?\r\n│\r\n╰─ ● yes / ○ no\r\n");
    }

    #[test]
    fn test_confirm_paint_no_selected() {
        let mut renderer = renderer();
        renderer.paint(&Session::confirm("proceed?", false)).unwrap();
        assert_eq!(output(&renderer), "╰─ ○ yes / ● no\r\n");
    }

    #[test]
    fn test_wide_options_are_truncated() {
        let mut renderer = renderer().with_width(Some(10));
        let session = Session::menu("Pick", &["abcdefghijklmnop", "ok"], 1).unwrap();
        renderer.paint(&session).unwrap();

        let painted = output(&renderer);
        let rows: Vec<&str> = painted.split("\r\n").collect();
        assert_eq!(rows[0], "    abcd…");
        assert_eq!(rows[1], "  ▶ ok");
        assert_eq!(rows[3], "─".repeat(9));
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("short", 10), "short");
        assert_eq!(fit_to_width("exactly", 7), "exactly");
        assert_eq!(fit_to_width("truncated", 5), "trun…");
        assert_eq!(fit_to_width("anything", 0), "");
        // Wide characters take two columns each
        assert_eq!(fit_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn test_tabs_expand_to_tab_stops() {
        assert_eq!(expand_control_chars("plain", 0), "plain");
        assert_eq!(expand_control_chars("a\tb", 0), "a       b");
        assert_eq!(expand_control_chars("a\tb", 4), "a   b");
        assert_eq!(expand_control_chars("x\x1b[2Jy\r", 0), "x?[2Jy?");
        // The tab counts as the seven columns it occupies
        assert_eq!(fit_to_width("a\tbcdefgh", 9), "a       …");
    }

    #[test]
    fn test_tab_in_option_stays_on_one_row() {
        let mut renderer = renderer().with_width(Some(14));
        let session = Session::menu("Pick", &["a\tbcdefgh", "ok"], 0).unwrap();
        assert_eq!(renderer.paint(&session).unwrap(), 4);

        let painted = output(&renderer);
        let rows: Vec<&str> = painted.split("\r\n").collect();
        assert_eq!(rows[0], "  ▶ a   bcde…");
        assert!(rows[0].width() < 14);
        assert!(!painted.contains('\t'));
    }

    #[test]
    fn test_color_codes_only_when_enabled() {
        let mut plain = renderer();
        plain.paint(&greek(0)).unwrap();
        assert!(!output(&plain).contains("\x1b["));

        let mut colored = Renderer::new(Vec::new(), SelectorConfig::default());
        colored.paint(&greek(0)).unwrap();
        assert!(output(&colored).contains("\x1b["));
    }

    #[test]
    fn test_auto_selected_notice() {
        let mut renderer = renderer();
        renderer.paint_auto_selected("Pick one", "beta").unwrap();
        assert_eq!(output(&renderer), "Pick one\n▶ beta (auto-selected)\n");
    }

    #[test]
    fn test_auto_confirmed_notice() {
        let mut renderer = renderer();
        renderer.paint_auto_confirmed("proceed?", false).unwrap();
        assert_eq!(output(&renderer), "proceed?\n▶ no (auto-selected)\n");
    }

    #[test]
    fn test_cancelled_notice() {
        let mut renderer = renderer();
        renderer.paint_cancelled(&greek(0)).unwrap();
        assert_eq!(output(&renderer), "Operation cancelled\r\n");
    }
}

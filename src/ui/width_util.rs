use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;
type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

/// Width helpers that ignore ANSI escape sequences.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    fn strip_ansi(s: &str) -> String {
        let mut out = Vec::with_capacity(s.len());
        let mut bytes = s.bytes().peekable();

        while let Some(byte) = bytes.next() {
            if byte == ESC_BYTE && matches!(bytes.peek(), Some(b'[')) {
                Self::consume_csi(&mut bytes);
                continue;
            }
            out.push(byte);
        }
        // Only whole escape sequences were removed, so UTF-8 stays intact.
        String::from_utf8(out).unwrap_or_default()
    }

    fn consume_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // skip '['
        for b in bytes.by_ref() {
            if b.is_ascii_alphabetic() {
                break;
            }
        }
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            format!("{s}{}", " ".repeat(width - w))
        }
    }

    /// Cut plain text to `width` characters, marking the cut with `~`.
    pub fn truncate(&self, s: &str, width: usize) -> String {
        if width == 0 || s.chars().count() <= width {
            return s.to_string();
        }
        let mut out: String = s.chars().take(width - 1).collect();
        out.push('~');
        out
    }

    /// Width of the attached terminal, if stdout is one.
    pub fn detected_width(&self) -> Option<usize> {
        terminal_size().map(|(Width(w), _)| w as usize)
    }
}

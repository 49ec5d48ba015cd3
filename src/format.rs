//! Text decoration helpers.
//!
//! Decorations wrap text in the symbol pairs configured in
//! [`TextFormatting`]. Several decorations open in the order given and close
//! in reverse, so `[Bold, Italic]` with the default symbols renders
//! `***text***` as `**` + `*` + text + `*` + `**`. Repeated decorations are
//! applied once.

use crate::config::TextFormatting;

/// A text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

impl TextFormatting {
    /// Symbol for a single decoration.
    pub fn symbol(&self, decoration: Decoration) -> &str {
        match decoration {
            Decoration::Bold => &self.bold,
            Decoration::Italic => &self.italic,
            Decoration::Underline => &self.underline,
            Decoration::Strikethrough => &self.strikethrough,
            Decoration::Code => &self.code,
        }
    }

    /// Wrap `text` in every decoration of `decorations`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bangcmd::config::TextFormatting;
    /// use bangcmd::format::Decoration;
    ///
    /// let fmt = TextFormatting::default();
    /// assert_eq!(
    ///     fmt.format_text("hi", &[Decoration::Underline, Decoration::Code, Decoration::Underline]),
    ///     "__`hi`__"
    /// );
    /// ```
    pub fn format_text(&self, text: &str, decorations: &[Decoration]) -> String {
        let mut unique: Vec<Decoration> = Vec::with_capacity(decorations.len());
        for &decoration in decorations {
            if !unique.contains(&decoration) {
                unique.push(decoration);
            }
        }

        let mut out = String::with_capacity(text.len() + 8 * unique.len());
        for &decoration in &unique {
            out.push_str(self.symbol(decoration));
        }
        out.push_str(text);
        for &decoration in unique.iter().rev() {
            out.push_str(self.symbol(decoration));
        }
        out
    }

    pub fn bold(&self, text: &str) -> String {
        self.format_text(text, &[Decoration::Bold])
    }

    pub fn italic(&self, text: &str) -> String {
        self.format_text(text, &[Decoration::Italic])
    }

    pub fn underline(&self, text: &str) -> String {
        self.format_text(text, &[Decoration::Underline])
    }

    pub fn strikethrough(&self, text: &str) -> String {
        self.format_text(text, &[Decoration::Strikethrough])
    }

    pub fn code(&self, text: &str) -> String {
        self.format_text(text, &[Decoration::Code])
    }
}

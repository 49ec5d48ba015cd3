//! Message templates that are either literal text or a formatter.

use std::fmt;
use std::sync::Arc;

/// Formatter closure for [`Template::Formatter`].
pub type FormatterFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A user-facing message template.
///
/// Formatters receive a single, already decorated parameter (for example
/// `**ping**`). Literals ignore the parameter.
#[derive(Clone)]
pub enum Template {
    Literal(String),
    Formatter(FormatterFn),
}

impl Template {
    /// Build a formatter template from a closure.
    pub fn formatter<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Formatter(Arc::new(f))
    }

    /// Render the template with `param`.
    pub fn render(&self, param: &str) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Formatter(f) => f(param),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Formatter(_) => f.write_str("Formatter(..)"),
        }
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

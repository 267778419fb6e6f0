use std::fmt;

/// Formats a slice as a markdown-style list, one entry per line.
///
/// The list starts on a fresh line so it can be appended to a log message.
pub struct PrettyList<'data, T>(pub &'data [T]);

impl<T: fmt::Display> fmt::Display for PrettyList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|entry| write!(f, "\n- {}", entry))?;
        f.write_str("\n")
    }
}

impl<T: fmt::Debug> fmt::Debug for PrettyList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0).finish()
    }
}

pub const DEFAULT_COLUMN_WIDTH: usize = 15;

/// What happens to values longer than the column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Cut the value to exactly the column width.
    #[default]
    Truncate,
    /// Keep the whole value; the column simply grows for that row.
    Extend,
}

/// Left-justified, fixed-width, tab-separated column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnFormat {
    pub width: usize,
    pub overflow: Overflow,
}

impl Default for ColumnFormat {
    fn default() -> Self {
        Self {
            width: DEFAULT_COLUMN_WIDTH,
            overflow: Overflow::Truncate,
        }
    }
}

impl ColumnFormat {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Width is counted in chars, not terminal cells.
    pub fn cell(&self, value: &str) -> String {
        let len = value.chars().count();
        if len > self.width {
            return match self.overflow {
                Overflow::Truncate => value.chars().take(self.width).collect(),
                Overflow::Extend => value.to_string(),
            };
        }
        let mut cell = String::with_capacity(value.len() + self.width - len);
        cell.push_str(value);
        cell.extend(std::iter::repeat_n(' ', self.width - len));
        cell
    }

    /// Format one newline-terminated row.
    pub fn row<I, S>(&self, values: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = values
            .into_iter()
            .map(|value| self.cell(value.as_ref()))
            .collect::<Vec<_>>()
            .join("\t");
        line.push('\n');
        line
    }
}

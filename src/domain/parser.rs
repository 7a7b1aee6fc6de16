use super::fields::FieldSet;

/// Split a comma-separated label line into a `FieldSet`.
///
/// Only the trailing line terminator is removed. Labels are not trimmed, and an
/// empty line still produces a single field with an empty label.
pub fn parse_labels(line: &str) -> FieldSet {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    FieldSet::new(line.split(',')).unwrap_or_else(|| unreachable!("split yields at least one item"))
}

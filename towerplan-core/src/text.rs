//! Line-oriented reading shared by the instance and solution parsers.

use std::str::FromStr;

use crate::{ParseError, Point};

/// Whether `line` is a comment such as `# Penalty: 1289.5`.
///
/// Only lines whose first character is `#` are comments.
#[must_use]
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Cursor over the non-comment lines of a document.
pub(crate) struct ContentLines<I> {
    lines: std::iter::Enumerate<I>,
}

impl<I, S> ContentLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub(crate) fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter().enumerate(),
        }
    }

    fn next_content(&mut self) -> Option<(usize, S)> {
        self.lines
            .by_ref()
            .find(|(_, line)| !is_comment(line.as_ref()))
            .map(|(index, line)| (index + 1, line))
    }

    /// Read the next header field as an integer.
    pub(crate) fn header<N>(&mut self, field: &'static str) -> Result<N, ParseError>
    where
        N: FromStr<Err = std::num::ParseIntError>,
    {
        let (line, text) = self
            .next_content()
            .ok_or(ParseError::TruncatedInput { field })?;
        let raw = text.as_ref();
        raw.trim()
            .parse()
            .map_err(|source| ParseError::InvalidNumber {
                line,
                field,
                value: raw.to_owned(),
                source,
            })
    }

    /// Parse every remaining line as a point and check the declared count.
    pub(crate) fn points(
        mut self,
        item: &'static str,
        declared: usize,
    ) -> Result<Vec<Point>, ParseError> {
        // `declared` comes from the document, so it never sizes an allocation.
        let mut points = Vec::new();
        while let Some((line, text)) = self.next_content() {
            let point =
                Point::parse(text.as_ref()).map_err(|source| ParseError::Point { line, source })?;
            points.push(point);
        }
        if points.len() != declared {
            return Err(ParseError::CountMismatch {
                item,
                declared,
                actual: points.len(),
            });
        }
        Ok(points)
    }
}

/// Byte offsets at which each line of the buffer begins.
///
/// Line numbers are 1-based. A line break (`\n`) belongs to the line it ends,
/// so the offset of the `\n` itself still reports the line before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { starts }
    }

    /// Number of lines, counting a trailing empty line after a final `\n`.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Returns `(line, column)` for a byte offset, both 1-based.
    ///
    /// The column is the byte distance from the preceding line break, so the
    /// first byte of every line is column 1.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line - 1];
        (line, offset - line_start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, (1, 1))]
    #[case(2, (1, 3))]
    #[case(3, (1, 4))] // the line break itself
    #[case(4, (2, 1))]
    #[case(6, (2, 3))]
    #[case(7, (3, 1))]
    fn positions(#[case] offset: usize, #[case] expected: (usize, usize)) {
        let index = LineIndex::new("abc\nde\n");
        assert_eq!(index.position(offset), expected);
    }

    #[test]
    fn empty_text_has_one_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position(0), (1, 1));
    }

    #[test]
    fn crlf_counts_once() {
        let index = LineIndex::new("a\r\nb");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.position(3), (2, 1));
    }
}

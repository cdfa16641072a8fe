/// Contract violations raised while binding or reading fragments.
///
/// These never describe a property of the input document: malformed markup is
/// recorded on nodes as a [`TagError`](crate::tree::TagError) instead. An
/// `Err` here means the parser produced an offset it should not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error("Fragment {start}+{len} exceeds source length {source_len}")]
    OutOfRange {
        start: usize,
        len: usize,
        source_len: usize,
    },

    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    #[error("Index and length not defined")]
    Undefined,
}

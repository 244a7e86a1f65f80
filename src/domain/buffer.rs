// ============================================================================
// Output Buffer
// Append-only fragment sequence assembled for a single group
// ============================================================================

use smallvec::SmallVec;

/// Append-only buffer of text fragments for the group currently being
/// converted.
///
/// The engine appends the group words and the magnitude word; hooks may
/// append arbitrary extra fragments around them. Existing content can never
/// be removed or reordered. Once a group is finalized the buffer is flushed
/// into the overall result and discarded.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    fragments: SmallVec<[String; 4]>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment to the end of the buffer.
    pub fn append(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Number of fragments appended so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Flush the buffer into the finalized group text. Fragments are
    /// concatenated verbatim; spacing is the appender's responsibility.
    pub fn finish(self) -> String {
        self.fragments.concat()
    }
}

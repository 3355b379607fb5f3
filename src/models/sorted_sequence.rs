use crate::types::ItemId;
use crate::Error;

/// A caller-supplied view of one ascending-sorted input sequence.
///
/// The variant is the representation tag the dispatch layer inspects: when
/// both inputs are `Ids`, counting takes the index-based fast path;
/// otherwise both sides are walked as pull sources. The sequence is only
/// read for the duration of the call, never retained or mutated.
pub enum SortedSequence<'a> {
    /// A random-accessible run of item IDs, ascending.
    Ids(&'a [ItemId]),
    /// A forward-only source that yields ascending item IDs on demand and
    /// is consumed exactly once. Each pull may fail for a reason other than
    /// ordinary exhaustion (e.g. a decode error in a streamed backing
    /// store), which aborts the count.
    Pull(Box<dyn Iterator<Item = Result<ItemId, Error>> + 'a>),
}

impl<'a> SortedSequence<'a> {
    /// Adapts either representation into a pull source for the generic
    /// counting path.
    pub fn into_pull(self) -> Box<dyn Iterator<Item = Result<ItemId, Error>> + 'a> {
        match self {
            SortedSequence::Ids(ids) => Box::new(ids.iter().map(|&id| Ok(id))),
            SortedSequence::Pull(source) => source,
        }
    }
}

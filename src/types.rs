// Types listed here are either shared across multiple files and/or exposed via the library.

// TODO: Offer a u32 id alias if a host with a narrow id space ever needs one
//
/// A unique identifier for an item in a collection (e.g., a product or add-on ID),
/// represented as a `u64`. The specialized counting path operates directly on
/// slices of these.
pub type ItemId = u64;

/// An owned, ascending-sorted list of item IDs, as produced by the id-list parser.
pub type ItemIdList = Vec<ItemId>;

/// The number of elements present in exactly one of two ascending sequences,
/// as counted by a two-pointer merge. Always non-negative.
pub type DiffCount = u64;

/// A bounded similarity score in `(0, 1]`, derived from a [`DiffCount`] as
/// `1 / (1 + diff_count)`.
pub type SimilarityScore = f64;

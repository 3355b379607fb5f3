pub mod count_id_slice_diff;
pub mod count_pull_diff;
pub mod parse_id_list;
pub mod similarity_from_diff_count;
pub mod try_compare;

pub use count_id_slice_diff::count_id_slice_diff;
pub use count_pull_diff::{count_iter_diff, count_pull_diff};
pub use parse_id_list::{parse_id_list, read_id_list_from_file};
pub use similarity_from_diff_count::similarity_from_diff_count;
pub use try_compare::try_compare;

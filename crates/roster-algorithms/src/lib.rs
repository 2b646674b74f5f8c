pub mod search;
pub mod sort;
pub mod tree;

pub use search::{binary_search_by, is_sorted_by};
pub use sort::merge_sort_by;
pub use tree::{LevelOrderTree, Levels, NodeIndex, TreeNode};

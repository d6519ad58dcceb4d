//! Various unsorted geometrical and logical operators.

pub use self::cleanup::remove_unused_points;
pub use self::hashable_point::HashablePoint;
pub use self::sorted_pair::SortedPair;

mod cleanup;
mod hashable_point;
pub mod hashmap;
mod sorted_pair;

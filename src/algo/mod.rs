//! Module containing all algorithms implementations.

pub mod visits;

mod post_order;
pub use post_order::post_order;

mod top_sort;
pub use top_sort::top_sort;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    use super::*;

    pub use visits::Sequential;
}

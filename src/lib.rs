//! Carves a polling-station voter roll into equal, geographically compact
//! electoral districts using greedy spatial seat allocation.

pub mod allocator;
pub mod repository;
pub mod roll;
pub mod shared;

pub mod prelude {
    pub use crate::allocator::{Allocator, Assignment, District};
    pub use crate::repository::Repository;
    pub use crate::roll::Roll;
}

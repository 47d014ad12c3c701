//! Signed great-circle distance from target points to the nearest boundary point.
pub mod distance;
pub mod field;

pub use distance::DistanceSolver;
pub use field::DistanceField;

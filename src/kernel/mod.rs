pub mod orientation;
pub mod predicates;

pub use orientation::{orient2d, orient3d};
pub use predicates::{are_collinear, are_equal, are_equal_2, point_in_triangle};

pub mod intersection;
pub mod plane;
pub mod point;
pub mod segment;
pub mod triangle;
pub mod util;
pub mod vector;

pub use intersection::{
    SegmentIntersection2, SegmentIntersection3, segment_segment_intersection_2,
    segment_segment_intersection_3,
};
pub use plane::Plane;
pub use point::{Point2, Point3};
pub use segment::{Segment2, Segment3};
pub use triangle::Triangle3;
pub use vector::{Vector2, Vector3, VectorOps};

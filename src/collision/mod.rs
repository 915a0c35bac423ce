pub mod manifold;
pub mod tri_tri_contact;

pub use manifold::{ContactManifold, MAX_CONTACTS};
pub use tri_tri_contact::{
    PlanePair, classify_planes, collide_triangle_triangle, contact_manifold, tri_tri_overlap,
};

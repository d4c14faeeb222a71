mod simplex;
mod collision_filter;

pub use self::simplex::SimplexType;
pub use self::collision_filter::{PhysicsGroup, PhysicsGroupMask};

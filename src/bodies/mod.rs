mod body_type;

pub use self::body_type::{RigidBodyType, RigidBodyTypeMask};

mod constraint_type;

pub use self::constraint_type::ConstraintType;

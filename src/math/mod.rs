mod axis;

pub use self::axis::AxisDirection;

category_enum! {
    /// Kind of joint between two bodies
    pub enum ConstraintType as "ConstraintType" {
        /// Ball-and-socket joint pinning two anchor points together
        PointToPoint = 0 => "POINT_TO_POINT",
        Hinge = 1 => "HINGE",
        ConeTwist = 2 => "CONE_TWIST",
        Fixed = 3 => "FIXED",
    }
    default = PointToPoint;
}

category_enum! {
    /// Shape kind of a collision volume
    pub enum ColliderType as "ColliderType" {
        Box = 0 => "BOX",
        Sphere = 1 => "SPHERE",
        Capsule = 2 => "CAPSULE",
        Cylinder = 3 => "CYLINDER",
        Cone = 4 => "CONE",
        /// Triangle mesh
        Mesh = 5 => "MESH",
        /// Infinite plane
        Plane = 6 => "PLANE",
        /// Point cloud of up to four vertices
        Simplex = 7 => "SIMPLEX",
        /// Height field
        Terrain = 8 => "TERRAIN",
    }
    default = Box;
}

impl ColliderType {
    /// Returns whether the shape is convex and can be fed to GJK directly
    pub fn is_convex(self) -> bool {
        !matches!(self, Self::Mesh | Self::Plane | Self::Terrain)
    }
}

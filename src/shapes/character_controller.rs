category_enum! {
    /// Shape used by a kinematic character controller
    pub enum CharacterControllerType as "CharacterControllerType" {
        Box = 0 => "BOX",
        Capsule = 1 => "CAPSULE",
    }
    default = Box;
}

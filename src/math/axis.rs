category_enum! {
    /// One of the three spatial axes
    pub enum AxisDirection as "AxisDirection" {
        XAxis = 0 => "X_AXIS",
        YAxis = 1 => "Y_AXIS",
        ZAxis = 2 => "Z_AXIS",
    }
    default = XAxis;
}

impl AxisDirection {
    /// All axes in component order
    pub const ALL: [AxisDirection; 3] = [Self::XAxis, Self::YAxis, Self::ZAxis];

    /// Returns the component index (x = 0, y = 1, z = 2)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis for a component index
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

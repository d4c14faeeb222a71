category_enum! {
    /// Simplex produced by GJK/EPA style distance queries, tagged by vertex count
    pub enum SimplexType as "SimplexType" {
        Vertex = 1 => "VERTEX",
        Line = 2 => "LINE",
        Triangle = 3 => "TRIANGLE",
        Tetrahedron = 4 => "TETRAHEDRON",
    }
    default = Vertex;
}

impl SimplexType {
    /// Returns the number of vertices in the simplex
    #[inline]
    pub fn vertex_count(self) -> usize {
        self as usize
    }

    /// Returns the simplex with `count` vertices
    pub fn from_vertex_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Vertex),
            2 => Some(Self::Line),
            3 => Some(Self::Triangle),
            4 => Some(Self::Tetrahedron),
            _ => None,
        }
    }

    /// Returns the simplex obtained by adding one support point.
    /// A tetrahedron cannot grow any further in three dimensions.
    pub fn next(self) -> Option<Self> {
        Self::from_vertex_count(self.vertex_count() + 1)
    }
}

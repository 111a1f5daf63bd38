use bytemuck::{Pod, Zeroable};

/// GPU representation of one quad corner for the vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Clip-space X and Y
    pub position: [f32; 2],
}

impl QuadVertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

/// Half the side length of the quad in clip space.
pub const QUAD_HALF_EXTENT: f32 = 0.5;

/// Corners in order: top-left, bottom-left, bottom-right, top-right.
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex::new(-QUAD_HALF_EXTENT, QUAD_HALF_EXTENT),
    QuadVertex::new(-QUAD_HALF_EXTENT, -QUAD_HALF_EXTENT),
    QuadVertex::new(QUAD_HALF_EXTENT, -QUAD_HALF_EXTENT),
    QuadVertex::new(QUAD_HALF_EXTENT, QUAD_HALF_EXTENT),
];

/// Two counter-clockwise triangles sharing the 0-2 diagonal.
pub const QUAD_INDICES: [u8; 6] = [0, 1, 2, 2, 3, 0];

/// Resolve the index list into triangle corner positions.
pub fn quad_triangles() -> Vec<[[f32; 2]; 3]> {
    QUAD_INDICES
        .chunks_exact(3)
        .map(|tri| {
            [
                QUAD_VERTICES[tri[0] as usize].position,
                QUAD_VERTICES[tri[1] as usize].position,
                QUAD_VERTICES[tri[2] as usize].position,
            ]
        })
        .collect()
}

/// Signed area, positive for counter-clockwise winding.
pub fn signed_area(tri: &[[f32; 2]; 3]) -> f32 {
    let [a, b, c] = tri;
    0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]))
}

/// Side of the square drawing surface for a viewport of `width` x `height`.
///
/// Negative or NaN dimensions produce a zero-sized surface.
pub fn square_side(width: f64, height: f64) -> u32 {
    let side = width.min(height);
    if side.is_nan() || side <= 0.0 {
        0
    } else {
        side.min(u32::MAX as f64) as u32
    }
}

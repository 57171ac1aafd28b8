use bytemuck::{Pod, Zeroable};
use psurf_math::Point3;

/// Scalar type of a vertex attribute as seen by the shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    F32,
}

impl NumericType {
    pub fn size(self) -> usize {
        match self {
            NumericType::F32 => std::mem::size_of::<f32>(),
        }
    }
}

/// One named attribute of a vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub kind: NumericType,
    pub components: usize,
}

impl VertexAttribute {
    pub const fn f32(name: &'static str, components: usize) -> Self {
        Self {
            name,
            kind: NumericType::F32,
            components,
        }
    }

    pub fn byte_size(&self) -> usize {
        self.kind.size() * self.components
    }
}

/// Ordered attribute layout of a vertex record.
pub type VertexFormat = &'static [VertexAttribute];

pub const SURFACE_FORMAT: VertexFormat = &[
    VertexAttribute::f32("point", 3),
    VertexAttribute::f32("du_point", 3),
    VertexAttribute::f32("dv_point", 3),
    VertexAttribute::f32("color", 4),
];

pub const TEXTURED_SURFACE_FORMAT: VertexFormat = &[
    VertexAttribute::f32("point", 3),
    VertexAttribute::f32("du_point", 3),
    VertexAttribute::f32("dv_point", 3),
    VertexAttribute::f32("im_coords", 2),
    VertexAttribute::f32("opacity", 1),
];

/// Total record size described by `format`.
pub fn format_stride(format: VertexFormat) -> usize {
    format.iter().map(VertexAttribute::byte_size).sum()
}

/// A vertex record whose first three fields are the base and nudged positions.
pub trait ShaderVertex: Pod + Zeroable {
    const FORMAT: VertexFormat;

    fn set_points(&mut self, point: Point3, du_point: Point3, dv_point: Point3);
}

fn to_f32(p: Point3) -> [f32; 3] {
    [p.x as f32, p.y as f32, p.z as f32]
}

/// Record for an untextured surface vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SurfaceVertex {
    pub point: [f32; 3],
    pub du_point: [f32; 3],
    pub dv_point: [f32; 3],
    pub color: [f32; 4],
}

impl ShaderVertex for SurfaceVertex {
    const FORMAT: VertexFormat = SURFACE_FORMAT;

    fn set_points(&mut self, point: Point3, du_point: Point3, dv_point: Point3) {
        self.point = to_f32(point);
        self.du_point = to_f32(du_point);
        self.dv_point = to_f32(dv_point);
    }
}

/// Record for a textured surface vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub point: [f32; 3],
    pub du_point: [f32; 3],
    pub dv_point: [f32; 3],
    pub im_coords: [f32; 2],
    pub opacity: f32,
}

impl ShaderVertex for TexturedVertex {
    const FORMAT: VertexFormat = TEXTURED_SURFACE_FORMAT;

    fn set_points(&mut self, point: Point3, du_point: Point3, dv_point: Point3) {
        self.point = to_f32(point);
        self.du_point = to_f32(du_point);
        self.dv_point = to_f32(dv_point);
    }
}

//! Turns sampled surfaces into vertex records and byte buffers ready for a
//! shader program.

pub mod assemble;
pub mod vertex;

pub use assemble::{batch_points, prepare_surface, RenderBatch, ShaderData, SurfaceUniforms};
pub use vertex::{
    NumericType, ShaderVertex, SurfaceVertex, TexturedVertex, VertexAttribute, VertexFormat,
    SURFACE_FORMAT, TEXTURED_SURFACE_FORMAT,
};

//! Packing surfaces into vertex records and byte buffers for the renderer.

use log::debug;
use psurf_core::{PsurfError, Result};
use psurf_math::Point3;
use psurf_mesh::attributes::{attribute_at, check_attribute_len};
use psurf_mesh::{ParametricSurface, Surface, SurfaceCore, TexturePaths, TexturedSurface};

use crate::vertex::{format_stride, ShaderVertex, SurfaceVertex, TexturedVertex, VertexFormat};

/// Surfaces that can fill an array of vertex records.
pub trait ShaderData {
    type Vertex: ShaderVertex;

    /// Write one record per base-grid vertex into `data`.
    ///
    /// `data` is resized to the vertex count; when the surface's points are
    /// locked the position fields keep whatever `data` already held.
    fn fill_shader_data(&self, data: &mut Vec<Self::Vertex>) -> Result<()>;

    fn shader_data(&self) -> Result<Vec<Self::Vertex>> {
        let mut data = Vec::new();
        self.fill_shader_data(&mut data)?;
        Ok(data)
    }

    fn shader_vert_indices(&self) -> &[u32];
}

/// Resize `data` and write positions unless the points are locked.
fn fill_points<V: ShaderVertex>(core: &SurfaceCore, data: &mut Vec<V>) {
    data.resize(core.vertex_count(), V::zeroed());
    if core.points_locked() {
        return;
    }
    let (base, du, dv) = core.surface_points_and_nudged_points();
    for (((vertex, &p), &pu), &pv) in data.iter_mut().zip(base).zip(du).zip(dv) {
        vertex.set_points(p, pu, pv);
    }
}

fn broadcast<T: Copy>(values: &[T], index: usize) -> Result<T> {
    attribute_at(values, index).ok_or(PsurfError::ShapeMismatch {
        expected: index + 1,
        actual: values.len(),
    })
}

impl ShaderData for ParametricSurface {
    type Vertex = SurfaceVertex;

    fn fill_shader_data(&self, data: &mut Vec<SurfaceVertex>) -> Result<()> {
        let rgbas = self.rgbas();
        check_attribute_len(rgbas.len(), self.vertex_count())?;
        fill_points(self.core(), data);
        for (i, vertex) in data.iter_mut().enumerate() {
            vertex.color = broadcast(rgbas, i)?.to_f32_array();
        }
        Ok(())
    }

    fn shader_vert_indices(&self) -> &[u32] {
        self.triangle_indices()
    }
}

impl ShaderData for TexturedSurface {
    type Vertex = TexturedVertex;

    fn fill_shader_data(&self, data: &mut Vec<TexturedVertex>) -> Result<()> {
        let count = self.vertex_count();
        let im_coords = self.im_coords();
        if im_coords.len() != count {
            return Err(PsurfError::ShapeMismatch {
                expected: count,
                actual: im_coords.len(),
            });
        }
        let opacity = self.opacity();
        check_attribute_len(opacity.len(), count)?;
        fill_points(self.core(), data);
        for (i, vertex) in data.iter_mut().enumerate() {
            let uv = im_coords[i];
            vertex.im_coords = [uv.x as f32, uv.y as f32];
            vertex.opacity = broadcast(opacity, i)? as f32;
        }
        Ok(())
    }

    fn shader_vert_indices(&self) -> &[u32] {
        self.triangle_indices()
    }
}

/// Uniform values shared by every vertex of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceUniforms {
    pub gloss: f32,
    pub shadow: f32,
    pub num_textures: u32,
}

/// One draw call's worth of data for a single surface.
#[derive(Debug, Clone)]
pub struct RenderBatch {
    pub shader_folder: &'static str,
    pub format: VertexFormat,
    /// Bytes per vertex record.
    pub stride: usize,
    pub vertex_bytes: Vec<u8>,
    pub index_bytes: Vec<u8>,
    pub vertex_count: usize,
    pub index_count: usize,
    pub uniforms: SurfaceUniforms,
    pub textures: Option<TexturePaths>,
}

impl RenderBatch {
    fn from_records<S: ShaderData>(
        surface: &S,
        shader_folder: &'static str,
        uniforms: SurfaceUniforms,
        textures: Option<TexturePaths>,
    ) -> Result<Self> {
        let records = surface.shader_data()?;
        let indices = surface.shader_vert_indices();
        let format = <S::Vertex as ShaderVertex>::FORMAT;
        Ok(Self {
            shader_folder,
            format,
            stride: format_stride(format),
            vertex_bytes: bytemuck::cast_slice::<_, u8>(&records[..]).to_vec(),
            index_bytes: bytemuck::cast_slice::<_, u8>(indices).to_vec(),
            vertex_count: records.len(),
            index_count: indices.len(),
            uniforms,
            textures,
        })
    }

    pub fn plain(surface: &ParametricSurface) -> Result<Self> {
        let uniforms = SurfaceUniforms {
            gloss: surface.gloss() as f32,
            shadow: surface.shadow() as f32,
            num_textures: 0,
        };
        Self::from_records(surface, "surface", uniforms, None)
    }

    pub fn textured(surface: &TexturedSurface) -> Result<Self> {
        let uniforms = SurfaceUniforms {
            gloss: surface.gloss() as f32,
            shadow: surface.shadow() as f32,
            num_textures: surface.num_textures(),
        };
        Self::from_records(
            surface,
            "textured_surface",
            uniforms,
            Some(surface.textures().clone()),
        )
    }

    /// Decode the vertex bytes back into records of type `V`.
    pub fn records<V: ShaderVertex>(&self) -> Result<Vec<V>> {
        if V::FORMAT != self.format {
            return Err(PsurfError::TypeMismatch(format!(
                "batch for {} does not hold the requested vertex type",
                self.shader_folder
            )));
        }
        let expected = self.vertex_count * self.stride;
        if self.vertex_bytes.len() != expected {
            return Err(PsurfError::ShapeMismatch {
                expected,
                actual: self.vertex_bytes.len(),
            });
        }
        Ok(bytemuck::pod_collect_to_vec(&self.vertex_bytes[..]))
    }

    pub fn indices(&self) -> Vec<u32> {
        bytemuck::pod_collect_to_vec(&self.index_bytes[..])
    }
}

/// One batch per family member of `surface` that has points.
pub fn prepare_surface(surface: &Surface) -> Result<Vec<RenderBatch>> {
    let mut batches = Vec::new();
    for member in surface.family_members_with_points() {
        let batch = match member {
            Surface::Plain(s) => RenderBatch::plain(s)?,
            Surface::Textured(s) => RenderBatch::textured(s)?,
            Surface::Group(_) => continue,
        };
        batches.push(batch);
    }
    debug!(
        "prepared {} batch(es) for {}",
        batches.len(),
        surface.kind_name()
    );
    Ok(batches)
}

/// Base-grid positions of a batch, widened back to `f64`.
pub fn batch_points(batch: &RenderBatch) -> Result<Vec<Point3>> {
    let points = match batch.shader_folder {
        "textured_surface" => batch
            .records::<TexturedVertex>()?
            .iter()
            .map(|v| v.point)
            .collect::<Vec<_>>(),
        _ => batch
            .records::<SurfaceVertex>()?
            .iter()
            .map(|v| v.point)
            .collect(),
    };
    Ok(points
        .into_iter()
        .map(|[x, y, z]| Point3::new(x as f64, y as f64, z as f64))
        .collect())
}

//! GPU-facing data layouts. Everything here is `#[repr(C)]` and mirrors a
//! WGSL struct; keep field order and padding in sync with the shaders.

/// Vertex of the morph scene's point grid
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl PointVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2],
    };
}

/// Vertex of a lit triangle mesh (logo parts, crystal)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };
}

/// Uniforms of the morph scene. `mix_factor` crossfades the two bound
/// textures; `coefficient` scales the point displacement.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MorphUniform {
    pub view_proj: [[f32; 4]; 4],
    pub time: f32,
    pub coefficient: f32,
    pub mix_factor: f32,
    pub _pad: f32,
}

/// Per-draw uniforms of the crystal scene
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CrystalUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

/// Material constants fed to the crystal shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 3],
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub roughness: f32,
    pub opacity: f32,
    pub _pad: [f32; 3],
}

/// One area light as the shader sees it
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub size: f32,
}

/// Fixed-size light block: eight area lights plus the ambient term
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightBlock {
    pub lights: [LightUniform; 8],
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pod_sizes_match_wgsl_alignment() {
        // vec3 + f32 pairs pack to 16-byte rows in the shader structs.
        assert_eq!(std::mem::size_of::<PointVertex>(), 20);
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
        assert_eq!(std::mem::size_of::<MorphUniform>(), 80);
        assert_eq!(std::mem::size_of::<CrystalUniform>(), 128);
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 48);
        assert_eq!(std::mem::size_of::<LightUniform>(), 32);
        assert_eq!(std::mem::size_of::<LightBlock>(), 8 * 32 + 16);
    }
}

use cgmath::Matrix4;
use wgpu::Device;

use crate::gfx::{camera::camera_utils::CameraManager, geometry::generate_cube};

use super::{loader::CubeInstance, mesh::Mesh};

/// GPU resources for one cube instance: its model matrix as a uniform plus
/// the bind group that exposes it to the shader.
pub struct InstanceGpuResources {
    pub transform_buffer: wgpu::Buffer,
    pub transform_bind_group: wgpu::BindGroup,
}

/// Main scene: the camera, the shared unit-cube mesh and the loaded blocks.
///
/// Blocks are immutable after load; each one gets its own transform bind
/// group at startup and one draw call per frame.
pub struct Scene {
    pub camera_manager: CameraManager,
    blocks: Vec<CubeInstance>,
    cube: Mesh,
    instance_resources: Vec<InstanceGpuResources>,
}

impl Scene {
    /// Creates a scene from a loaded block list.
    pub fn new(camera_manager: CameraManager, blocks: Vec<CubeInstance>) -> Self {
        let (vertices, indices) = generate_cube().to_scene_format();
        Self {
            camera_manager,
            blocks,
            cube: Mesh::new(vertices, indices),
            instance_resources: Vec::new(),
        }
    }

    /// Updates per-frame state (camera matrices).
    pub fn update(&mut self) {
        self.camera_manager.update();
    }

    pub fn blocks(&self) -> &[CubeInstance] {
        &self.blocks
    }

    pub fn cube(&self) -> &Mesh {
        &self.cube
    }

    pub fn instance_resources(&self) -> &[InstanceGpuResources] {
        &self.instance_resources
    }

    /// One model matrix per block, in draw-submission order.
    pub fn instance_transforms(&self) -> Vec<Matrix4<f32>> {
        self.blocks.iter().map(CubeInstance::model_matrix).collect()
    }

    /// Uploads the cube mesh and one transform uniform per block.
    ///
    /// Block positions never change after load, so each transform buffer is
    /// written once here and never touched again.
    pub fn init_gpu_resources(
        &mut self,
        device: &Device,
        transform_layout: &wgpu::BindGroupLayout,
    ) {
        self.cube.init_gpu_resources(device);

        self.instance_resources = self
            .blocks
            .iter()
            .map(|block| {
                let transform: [[f32; 4]; 4] = block.model_matrix().into();
                let transform_buffer = wgpu::util::DeviceExt::create_buffer_init(
                    device,
                    &wgpu::util::BufferInitDescriptor {
                        label: Some("Transform Uniform Buffer"),
                        contents: bytemuck::cast_slice(&transform),
                        usage: wgpu::BufferUsages::UNIFORM,
                    },
                );

                let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Transform Bind Group"),
                    layout: transform_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: transform_buffer.as_entire_binding(),
                    }],
                });

                InstanceGpuResources {
                    transform_buffer,
                    transform_bind_group,
                }
            })
            .collect();
    }
}

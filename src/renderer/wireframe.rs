use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::math::WireframeMesh;

const INITIAL_VERTICES_PER_BUFFER: usize = 4096;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// How a polyline family is turned into line-strip draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// One strip per polyline, so consecutive polylines are not joined.
    Independent,
    /// The whole family as a single strip; the end of each polyline is
    /// connected to the start of the next one.
    Continuous,
}

impl StripMode {
    pub fn label(&self) -> &'static str {
        match self {
            StripMode::Independent => "Independent strips",
            StripMode::Continuous => "Single strip",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripLayout {
    vertex_count: u32,
    strip_len: u32,
}

impl StripLayout {
    /// `floats` is the length of the flat `xyz` array.
    pub fn from_flat(floats: usize, strip_len: u32) -> Self {
        Self {
            vertex_count: (floats / 3) as u32,
            strip_len: strip_len.max(1),
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn ranges(&self, mode: StripMode) -> Vec<Range<u32>> {
        if self.vertex_count == 0 {
            return Vec::new();
        }

        match mode {
            StripMode::Continuous => vec![0..self.vertex_count],
            StripMode::Independent => (0..self.vertex_count)
                .step_by(self.strip_len as usize)
                .map(|start| start..(start + self.strip_len).min(self.vertex_count))
                .collect(),
        }
    }
}

pub struct PolylineBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    layout: StripLayout,
}

impl PolylineBuffer {
    pub fn new(device: &wgpu::Device, label: &'static str) -> Self {
        let size = (INITIAL_VERTICES_PER_BUFFER * std::mem::size_of::<Vertex>()) as u64;

        Self {
            label,
            buffer: create_vertex_buffer(device, label, size),
            layout: StripLayout::default(),
        }
    }

    /// Replaces the buffer contents with `vertices` (flat `xyz`), growing the
    /// device allocation when it is too small.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[f32],
        strip_len: u32,
    ) {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let needed = bytes.len() as u64;

        if needed > self.buffer.size() {
            log::debug!(
                "{}: growing from {} to {} bytes",
                self.label,
                self.buffer.size(),
                needed
            );
            self.buffer = create_vertex_buffer(device, self.label, needed);
        }

        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }

        self.layout = StripLayout::from_flat(vertices.len(), strip_len);
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, mode: StripMode) {
        if self.layout.vertex_count() == 0 {
            return;
        }

        render_pass.set_vertex_buffer(0, self.buffer.slice(..));
        for range in self.layout.ranges(mode) {
            render_pass.draw(range, 0..1);
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.layout.vertex_count()
    }
}

fn create_vertex_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size.max(std::mem::size_of::<Vertex>() as u64),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Device copies of both polyline families of a [`WireframeMesh`].
pub struct WireframeBuffers {
    pub t_lines: PolylineBuffer,
    pub v_lines: PolylineBuffer,
}

impl WireframeBuffers {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            t_lines: PolylineBuffer::new(device, "T Polyline Buffer"),
            v_lines: PolylineBuffer::new(device, "V Polyline Buffer"),
        }
    }

    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, mesh: &WireframeMesh) {
        self.t_lines
            .upload(device, queue, &mesh.t_polylines, mesh.v_segments + 1);
        self.v_lines
            .upload(device, queue, &mesh.v_polylines, mesh.u_segments + 1);
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, mode: StripMode) {
        self.t_lines.draw(render_pass, mode);
        self.v_lines.draw(render_pass, mode);
    }
}

pub fn polyline_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    }
}

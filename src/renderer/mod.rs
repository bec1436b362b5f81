pub mod camera;
pub mod gpu;
pub mod wireframe;

pub use camera::Trackball;
pub use gpu::{GpuContext, WireframeScene};
pub use wireframe::StripMode;

/// Adapter-less machines get `None`, and device tests return early.
#[cfg(test)]
pub(crate) fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))?;
    pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default(), None)).ok()
}

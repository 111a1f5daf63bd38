use bytemuck::Pod;

use super::backend::{BufferTarget, BufferUsage, GraphicsBackend};
use crate::domain::errors::{RenderingError, SandboxResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// A payload and where it should go. Uploaded once by [`BufferSpec::create`].
#[derive(Debug, Clone)]
pub struct BufferSpec {
    target: BufferTarget,
    usage: BufferUsage,
    data: Vec<u8>,
}

impl BufferSpec {
    pub fn new(target: BufferTarget, usage: BufferUsage) -> Self {
        Self { target, usage, data: Vec::new() }
    }

    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_pod_data<T: Pod>(self, data: &[T]) -> Self {
        self.with_data(bytemuck::cast_slice::<T, u8>(data).to_vec())
    }

    /// Allocate, bind to the target and upload. The buffer stays bound.
    /// Without data, zero bytes are uploaded.
    pub fn create<B: GraphicsBackend>(self, gl: &B) -> SandboxResult<GpuBuffer<B>> {
        let handle = gl
            .create_buffer()
            .ok_or(RenderingError::BufferAllocationFailed(self.target.label()))?;
        gl.bind_buffer(self.target, Some(&handle));
        gl.buffer_data(self.target, &self.data, self.usage);

        log_debug!(
            LogComponent::Infrastructure("Buffer"),
            "{} buffer uploaded: {} bytes, {:?}",
            self.target.label(),
            self.data.len(),
            self.usage
        );

        Ok(GpuBuffer { handle })
    }
}

/// A buffer object holding its uploaded payload.
pub struct GpuBuffer<B: GraphicsBackend> {
    handle: B::Buffer,
}

impl<B: GraphicsBackend> GpuBuffer<B> {
    pub fn handle(&self) -> &B::Buffer {
        &self.handle
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("surface reports no supported formats for this adapter")]
    NoSurfaceFormat,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("{label} failed validation:\n{log}")]
    Pipeline { label: &'static str, log: String },

    #[error("out of GPU memory while acquiring frame")]
    OutOfMemory,
}

mod denoise_service;
mod normalizer;
mod processing_pipeline;
mod result_sweeper;

pub use denoise_service::{DenoiseError, DenoiseService};
pub use normalizer::{normalize_peak, peak_amplitude};
pub use processing_pipeline::{ProcessingError, ProcessingPipeline};
pub use result_sweeper::ResultSweeper;

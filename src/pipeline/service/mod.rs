pub mod classify_pipeline;
pub mod classify_service;

pub use classify_pipeline::{ClassifyPipeline, ClassifyPipelineBuilder};
pub use classify_service::ClassifyService;

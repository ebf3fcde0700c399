//! Main module for lssea report handling

pub mod diagram;
pub mod discovery;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod report;

// Re-export the model and the file-level entry point; most callers need
// nothing deeper.
pub use diagram::render_text_diagram;
pub use model::{AdapterRef, EtherchannelGroup, HostConfig, PropertyMap, SeaRecord};
pub use pipeline::{ExtractionPipeline, PipelineError};
pub use report::parse_report;

pub mod error;
pub mod pipeline;
pub mod table;

pub use error::{PipelineError, Result};
pub use pipeline::{run, PipelineConfig};

pub mod cli;
pub mod ctx;
pub mod error;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod plate;
pub mod schema;

pub use error::AnalysisError;

// Model exports
pub mod requests;
pub mod responses;

pub use requests::{ClassificationRequest, RequestError};
pub use responses::{AnalysisMethod, BmiAnalysis, ClassificationOutcome, ClassificationResult, ErrorResponse};

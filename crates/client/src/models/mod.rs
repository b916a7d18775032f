//! Typed views of Splunk responses.
//!
//! Responses are decoded here, at the boundary, so the rest of the pipeline
//! works on these types instead of raw JSON.

mod messages;
mod results;
mod status;
mod submission;

pub use messages::{SplunkMessage, SplunkMessages};
pub use results::{NormalizedRecord, ResultTable, Row};
pub use status::{JobStatusResponse, JobStatusSnapshot};
pub use submission::{SubmissionBody, SubmitResponse};

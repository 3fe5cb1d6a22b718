pub mod article;
pub mod submission;

pub use article::{LengthOption, SubmissionRequest};
pub use submission::{SubmissionState, SubmissionStatus, SubmitOutcome};

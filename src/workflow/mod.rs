pub mod submission_flow;

pub use submission_flow::SubmissionController;

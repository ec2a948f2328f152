//! Upload intake: validation, blob naming and the orchestrating service.

pub mod naming;
pub mod service;
pub mod types;
pub mod validator;

pub use service::UploadService;
pub use types::{IncomingFile, SizeLimitExceeded, StagedUpload, UploadSubmission};
pub use validator::IntakeValidator;

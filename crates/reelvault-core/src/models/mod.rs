pub mod upload;

pub use upload::{description_or_default, title_or_default, NewUploadRecord, UploadRecord};

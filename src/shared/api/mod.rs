mod response;

pub use response::{ErrorDetail, ErrorPayload, UploadResponse};

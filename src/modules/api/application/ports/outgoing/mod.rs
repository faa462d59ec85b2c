pub mod admin_api;

pub use admin_api::{decode, endpoints, AdminApi, ApiError, UploadAsset, GENERIC_API_ERROR};

pub mod http_admin_api;

pub use http_admin_api::HttpAdminApi;

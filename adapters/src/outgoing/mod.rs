pub mod fs_store;
pub mod image_rs;
pub mod reqwest_http;

pub mod image_fetch_reqwest;

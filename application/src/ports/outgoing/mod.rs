pub mod image_codec;
pub mod image_fetch;
pub mod output_sink;
pub mod scratch_store;

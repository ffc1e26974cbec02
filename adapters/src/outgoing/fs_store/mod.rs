pub mod output_sink_fs;
pub mod scratch_store_fs;

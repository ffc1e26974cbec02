pub mod raster_codec_image;

pub mod aspect_ratio;
pub mod output_format;

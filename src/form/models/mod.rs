pub mod downloaded_image;
pub mod image_form;

pub mod analyze_image;
pub mod analyze_text;
pub mod index;
pub mod submit_image;
pub mod submit_text;

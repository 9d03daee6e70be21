/// hands structure images to the platform's default viewer
pub mod viewer;

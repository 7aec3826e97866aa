pub mod file_dropzone;
pub mod map_picker;
pub mod ui;

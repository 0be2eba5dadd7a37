pub mod grayscale_png;
pub mod preview;

pub use grayscale_png::{decode_grayscale_png, load_grayscale_png};
pub use preview::{encode_preview_png, write_preview_png};

mod normal_mode;
mod overlay_mode;

pub use normal_mode::handle_normal_mode;
pub use overlay_mode::handle_overlay_mode;

pub mod use_lived_time;
pub mod use_viewport_width;

pub mod birth_date_modal;
pub mod header;
pub mod lived_time_display;

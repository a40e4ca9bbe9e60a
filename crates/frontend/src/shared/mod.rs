pub mod api_utils;
pub mod date_utils;
pub mod debounce;
pub mod dom;
pub mod icons;
pub mod modal_frame;
pub mod page_data;
pub mod toast;

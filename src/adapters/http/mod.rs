pub mod app_error_impl;
pub mod bearer;

pub mod app_error;
pub mod clock;
pub mod codec;
pub mod token_service;

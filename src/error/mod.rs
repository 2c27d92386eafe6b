pub mod api_error;
pub mod db_error;
pub mod error_code;
pub mod request_error;

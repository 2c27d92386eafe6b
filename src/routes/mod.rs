pub mod ranking;
pub mod root;

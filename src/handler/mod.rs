pub mod ranking_handler;

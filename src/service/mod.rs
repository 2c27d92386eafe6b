pub mod ranking_service;

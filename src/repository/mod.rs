pub mod ranking_repository;

pub mod ranking_dto;

pub mod ranking_state;

use crate::{handler::ranking_handler, state::ranking_state::RankingState};
use axum::{routing::get, Router};

pub fn routes() -> Router<RankingState> {
    let router = Router::new()
        .route(
            "/rankings",
            get(ranking_handler::get_rankings).post(ranking_handler::submit_ranking),
        )
        .route(
            "/rankings/:difficulty",
            get(ranking_handler::get_rankings_by_difficulty),
        );
    return router;
}

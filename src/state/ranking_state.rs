use crate::db::database::Database;
use crate::repository::ranking_repository::{RankingRepository, RankingRepositoryTrait};
use crate::service::ranking_service::RankingService;
use std::sync::Arc;

#[derive(Clone)]
pub struct RankingState {
    pub ranking_service: Arc<RankingService>,
}

impl RankingState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self::with_repository(Arc::new(RankingRepository::new(db_conn)))
    }

    pub fn with_repository(rank_repo: Arc<dyn RankingRepositoryTrait>) -> Self {
        Self {
            ranking_service: Arc::new(RankingService::new(rank_repo)),
        }
    }
}

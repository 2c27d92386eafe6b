use crate::dto::ranking_dto::SubmitRankingReq;
use crate::error::api_error::ApiError;
use crate::error::db_error::DbError;
use crate::model::ranking::RankingEntry;
use crate::repository::ranking_repository::RankingRepositoryTrait;
use std::sync::Arc;

#[derive(Clone)]
pub struct RankingService {
    rank_repo: Arc<dyn RankingRepositoryTrait>,
}

impl RankingService {
    pub fn new(rank_repo: Arc<dyn RankingRepositoryTrait>) -> Self {
        Self { rank_repo }
    }

    pub async fn get_rankings(&self, difficulty: Option<i32>) -> Result<Vec<RankingEntry>, ApiError> {
        match self.rank_repo.fetch_rankings(difficulty).await {
            Ok(rankings) => Ok(rankings),
            Err(err) => {
                tracing::error!(
                    "fetch rankings from postgres error, difficulty:{:?} error:{}",
                    difficulty,
                    err.to_string()
                );
                Err(DbError::FetchRankingsFailed(err))?
            }
        }
    }

    pub async fn submit_ranking(&self, payload: SubmitRankingReq) -> Result<(), ApiError> {
        match self.rank_repo.insert_ranking(&payload).await {
            Ok(_) => {
                tracing::info!(
                    "ranking added | battle_tag:{} score:{} difficulty:{}",
                    payload.battle_tag,
                    payload.score,
                    payload.difficulty_level
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!("insert ranking to postgres error :{}", err.to_string());
                Err(DbError::InsertRankingFailed(err))?
            }
        }
    }
}

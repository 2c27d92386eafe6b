use crate::db::database::{Database, DatabaseTrait};
use crate::dto::ranking_dto::SubmitRankingReq;
use crate::model::ranking::RankingEntry;
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use std::sync::Arc;

const SELECT_RANKINGS: &str =
    "SELECT id, user_battle_tag, score, difficulty_level, created_at FROM ranking";
// 分数高的在前，同分先提交的在前
const ORDER_RANKINGS: &str = " ORDER BY score DESC, created_at ASC, id ASC";

const INSERT_RANKING: &str = "INSERT INTO ranking (
			user_battle_tag,
			score,
			difficulty_level,
			created_at
		)
		VALUES($1, $2, $3, NOW())";

#[derive(Clone)]
pub struct RankingRepository {
    pub(crate) db_conn: Arc<Database>,
}

impl RankingRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RankingRepositoryTrait: Send + Sync {
    /// 获取排行榜，`difficulty` 为空时返回全部难度
    async fn fetch_rankings(&self, difficulty: Option<i32>)
        -> Result<Vec<RankingEntry>, sqlx::Error>;

    /// 写入一局成绩，时间由数据库生成
    async fn insert_ranking(&self, payload: &SubmitRankingReq) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl RankingRepositoryTrait for RankingRepository {
    async fn fetch_rankings(
        &self,
        difficulty: Option<i32>,
    ) -> Result<Vec<RankingEntry>, sqlx::Error> {
        let mut builder = select_rankings_query(difficulty);
        let rankings = builder
            .build_query_as::<RankingEntry>()
            .fetch_all(self.db_conn.get_pool())
            .await?;
        tracing::debug!(
            "fetch_rankings - difficulty:{:?} rows:{}",
            difficulty,
            rankings.len()
        );
        Ok(rankings)
    }

    async fn insert_ranking(&self, payload: &SubmitRankingReq) -> Result<(), sqlx::Error> {
        let sql_ret = sqlx::query(INSERT_RANKING)
            .bind(&payload.battle_tag)
            .bind(payload.score)
            .bind(payload.difficulty_level)
            .execute(self.db_conn.get_pool())
            .await?;
        // 成功
        tracing::debug!("insert_ranking - rows_affected:{}", sql_ret.rows_affected());
        Ok(())
    }
}

/// 拼接排行榜查询，难度作为绑定参数
fn select_rankings_query(difficulty: Option<i32>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_RANKINGS);
    if let Some(difficulty) = difficulty {
        builder.push(" WHERE difficulty_level = ").push_bind(difficulty);
    }
    builder.push(ORDER_RANKINGS);
    builder
}

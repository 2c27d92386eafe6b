//! 数据库存储的排行榜记录
//!
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一局游戏的成绩，只追加不修改
///
/// `date_game` 由数据库在写入时生成，统一按 UTC 返回。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct RankingEntry {
    pub id: i32,
    #[sqlx(rename = "user_battle_tag")]
    pub battle_tag: String,
    pub score: i32,
    pub difficulty_level: i32,
    #[sqlx(rename = "created_at")]
    pub date_game: DateTime<Utc>,
}

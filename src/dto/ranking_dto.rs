//! 排行榜传输用到的数据结构
//!
//!

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 提交一局成绩
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SubmitRankingReq {
    #[validate(length(min = 1, message = "battle_tag must not be empty"))]
    pub battle_tag: String,
    pub score: i32,
    pub difficulty_level: i32,
}

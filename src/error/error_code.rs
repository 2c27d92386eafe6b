// db错误
// 13xxx
pub const FETCH_RANKINGS_FAILED: u32 = 13001;
pub const INSERT_RANKING_FAILED: u32 = 13002;

// request错误
// 20xxx
pub const VALIDATION_ERROR: u32 = 20001;
pub const JSON_REJECTION: u32 = 20002;
pub const INVALID_DIFFICULTY: u32 = 20005;

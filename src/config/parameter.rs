use dotenv;

// 默认监听端口
pub const DEFAULT_SERVER_PORT: &str = "9080";
// 默认允许跨域的前端地址
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
// 默认连接池大小
pub const DEFAULT_DB_MAX_CONNECTIONS: &str = "10";

pub fn init() {
    // .env 不存在时直接使用进程环境变量
    dotenv::dotenv().ok();
    // 给日志库设置环境变量
    set_default("RUST_LOG", "debug");
    set_default("SERVER_PORT", DEFAULT_SERVER_PORT);
    set_default("CORS_ORIGIN", DEFAULT_CORS_ORIGIN);
    set_default("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS);

    if std::env::var_os("DATABASE_URL").is_none() {
        panic!("config -- env var `DATABASE_URL` is not exist ");
    }
}

fn set_default(parameter: &str, value: &str) {
    if std::env::var_os(parameter).is_none() {
        std::env::set_var(parameter, value)
    }
}

pub fn get(parameter: &str) -> String {
    let env_parameter = std::env::var(parameter)
        .expect(&format!("{} is not defined in the environment.", parameter));
    return env_parameter;
}

/// 读取数值型参数，解析失败时回退到默认值
pub fn get_or<T: std::str::FromStr>(parameter: &str, default: T) -> T {
    match std::env::var(parameter) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("config -- `{}={}` is invalid, use default", parameter, value);
            default
        }),
        Err(_) => default,
    }
}

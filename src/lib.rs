use cache::TokenTable;
use config::Config;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tokens: TokenTable,
}

impl AppState {
    /// 创建空 token 表的应用状态
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tokens: TokenTable::new(),
        }
    }
}

// 缓存模块
// 进程内的 token 表，服务重启后清空

pub mod token;

pub use token::TokenTable;

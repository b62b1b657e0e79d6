use std::env;

use thiserror::Error;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
// Android 模拟器访问宿主机的地址
pub const DEFAULT_BASE_URL: &str = "http://10.0.2.2:8080/addFriend";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// 加好友链接的基础地址，token 以查询参数拼接在后面
    pub base_url: String,
    /// 为 true 时无效 token 返回 404，否则保持 200 + 提示文本
    pub reject_unknown_token: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            reject_unknown_token: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置，缺失的键使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: raw,
            })?,
            None => defaults.server_port,
        };

        let reject_unknown_token = match lookup("REJECT_UNKNOWN_TOKEN") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                key: "REJECT_UNKNOWN_TOKEN",
                value: raw,
            })?,
            None => defaults.reject_unknown_token,
        };

        let base_url = match lookup("FRIEND_LINK_BASE_URL") {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Empty("FRIEND_LINK_BASE_URL"));
            }
            Some(raw) => raw.trim().to_string(),
            None => defaults.base_url,
        };

        Ok(Config {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            base_url,
            reject_unknown_token,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// 菜单文件路径; 为空时使用内置菜单
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub sender: String,
    pub relay_url: Option<String>,
    /// 邮件中继请求超时 (秒)
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/voice_order".to_string(),
                max_connections: 5,
            },
            menu: MenuConfig::default(),
            notify: NotifyConfig {
                sender: "orders@localhost".to_string(),
                relay_url: None,
                timeout_secs: 10,
            },
        }
    }
}

impl AppConfig {
    /// 加载顺序: 默认值 -> config/voice_order.* (可选) -> VOICE_ORDER_* 环境变量 -> DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            File::with_name("config/voice_order").required(false),
            Environment::with_prefix("VOICE_ORDER")
                .prefix_separator("_")
                .separator("__"),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    fn load_from<F>(file: F, env: Environment, database_url: Option<String>) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("notify.sender", defaults.notify.sender)?
            .set_default("notify.timeout_secs", i64::try_from(defaults.notify.timeout_secs).unwrap_or(10))?
            .add_source(file)
            .add_source(env);

        if let Some(url) = database_url {
            builder = builder.set_override("database.url", url)?;
        }

        builder.build()?.try_deserialize()
    }
}

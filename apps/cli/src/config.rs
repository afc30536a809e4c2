use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_NUMBER_OF_RESULTS: usize = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// 索引存储目录
    pub index_path: PathBuf,
    /// 待索引的 .txt 文档目录
    pub text_path: PathBuf,
    /// 每次查询返回的结果数量上限（正整数）
    pub number_of_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from("index"),
            text_path: PathBuf::from("text"),
            number_of_results: DEFAULT_NUMBER_OF_RESULTS,
        }
    }
}

impl Config {
    /// 从工作目录的 config.toml 加载配置
    ///
    /// 加载永不失败：文件缺失、不可读或解析出错都回退到默认值并打印警告。
    pub fn load() -> Config {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Config {
        let cfg = match std::fs::read_to_string(path) {
            Ok(user_config_str) => match Self::load_str(&user_config_str) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("配置文件解析失败，使用默认配置 {}: {}", path.display(), e);
                    Config::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("配置文件不存在，使用默认配置: {}", path.display());
                Config::default()
            }
            Err(e) => {
                tracing::warn!("配置文件读取失败，使用默认配置 {}: {}", path.display(), e);
                Config::default()
            }
        };
        cfg.validated()
    }

    fn load_str(user_config_str: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(user_config_str)
    }

    /// 结果上限必须为正，0 回退到默认值
    fn validated(mut self) -> Config {
        if self.number_of_results == 0 {
            tracing::warn!(
                "number-of-results 必须为正整数，回退到默认值 {}",
                DEFAULT_NUMBER_OF_RESULTS
            );
            self.number_of_results = DEFAULT_NUMBER_OF_RESULTS;
        }
        self
    }
}

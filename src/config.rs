use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 作品データのスプレッドシートID
pub const DEFAULT_SHEET_ID: &str = "1OpPXBFGI8v8u7fNN7ZChY0PNXhpKvT8ol6tFNYVpsu0";

/// 環境変数でシートIDを上書きする
const SHEET_ID_ENV: &str = "PORTFOLIO_SHEET_ID";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet_id: String,
    /// 作品タブ名
    pub works_tab: String,
    /// 作品タブが取得できないときのタブ名（旧シート）
    pub fallback_tab: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.into(),
            works_tab: "works".into(),
            fallback_tab: "projects".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio-sheet").join("config.json"))
    }

    /// 使用するシートID（環境変数を優先）
    pub fn sheet_id(&self) -> Result<String> {
        if let Ok(id) = std::env::var(SHEET_ID_ENV) {
            if !id.trim().is_empty() {
                return Ok(id.trim().to_string());
            }
        }

        if self.sheet_id.trim().is_empty() {
            return Err(PortfolioError::Config("シートIDが設定されていません".into()));
        }
        Ok(self.sheet_id.trim().to_string())
    }

    pub fn set_sheet_id(&mut self, id: String) -> Result<()> {
        self.sheet_id = id;
        self.save()
    }
}

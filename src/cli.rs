use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオ作品シートの取得・正規化ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 作品タブを取得して一覧を表示/出力
    Works {
        /// 注目作品のみ（表示順で並べる）
        #[arg(long)]
        featured: bool,

        /// 非公開の作品も含める
        #[arg(long)]
        all: bool,

        /// 出力ファイル（省略時は一覧を表示）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/csv)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
    },

    /// 任意のタブを取得して生レコードを表示
    Sheet {
        /// タブ名
        #[arg(required = true)]
        tab: String,

        /// 列名の候補（部分一致、先に書いたものを優先）
        #[arg(short, long)]
        column: Vec<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 説明文をHTMLに変換
    Render {
        /// 入力テキストファイル（省略時は標準入力）
        input: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// シートIDを設定
        #[arg(long)]
        set_sheet_id: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use json or csv", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_works_command() {
        let cli = Cli::parse_from(["portfolio", "works", "--featured", "-f", "csv", "-o", "out.csv"]);
        match cli.command {
            Commands::Works { featured, all, output, format } => {
                assert!(featured);
                assert!(!all);
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert_eq!(format, ExportFormat::Csv);
            }
            _ => panic!("works コマンドとして解析されるはず"),
        }
    }

    #[test]
    fn test_parse_sheet_columns() {
        let cli = Cli::parse_from(["portfolio", "-v", "sheet", "projects", "-c", "title", "-c", "name"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Sheet { tab, column, json } => {
                assert_eq!(tab, "projects");
                assert_eq!(column, vec!["title", "name"]);
                assert!(!json);
            }
            _ => panic!("sheet コマンドとして解析されるはず"),
        }
    }
}

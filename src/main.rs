use clap::Parser;
use portfolio_common::{featured_works, published_works, render_description, Work, WorkCard};
use portfolio_sheet::{cli, config, error, export, fetcher};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use fetcher::SheetFetcher;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Works { featured, all, output, format } => {
            println!("🎨 portfolio - 作品一覧\n");

            println!("[1/2] シートを取得中...");
            let fetcher = SheetFetcher::from_config(&config)?;
            let works = fetcher.fetch_normalized_works().await?;
            println!("✔ {}件の作品を取得\n", works.len());

            let selected: Vec<&Work> = if featured {
                featured_works(&works)
            } else if all {
                works.iter().collect()
            } else {
                published_works(&works)
            };
            let cards: Vec<WorkCard> = selected
                .into_iter()
                .cloned()
                .map(WorkCard::from_work)
                .collect();

            match output {
                Some(output) => {
                    println!("[2/2] 出力中...");
                    let path = export::export_works(&cards, format, &output)?;
                    println!("✔ {}件を出力: {}", cards.len(), path.display());
                }
                None => {
                    println!("[2/2] 一覧");
                    for card in &cards {
                        print_card(card);
                    }
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Sheet { tab, column, json } => {
            let fetcher = SheetFetcher::from_config(&config)?;
            let sheet = fetcher.fetch_sheet(&tab).await?;

            if !column.is_empty() {
                let patterns: Vec<&str> = column.iter().map(String::as_str).collect();
                match sheet.column(&patterns) {
                    Some(values) => {
                        for value in values {
                            println!("{}", value);
                        }
                    }
                    None => println!("一致する列がありません: {}", column.join(", ")),
                }
            } else if json {
                println!("{}", serde_json::to_string_pretty(&*sheet)?);
            } else {
                println!("タブ「{}」: {}列 / {}行", tab, sheet.headers.len(), sheet.records.len());
                println!("  列: {}", sheet.headers.join(" | "));
                for (i, record) in sheet.records.iter().enumerate() {
                    println!("\n#{}", i + 1);
                    for (key, value) in record.iter().filter(|(_, v)| !v.is_empty()) {
                        println!("  {}: {}", key, value);
                    }
                }
            }
        }

        Commands::Render { input } => {
            let text = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            println!("{}", render_description(&text));
        }

        Commands::Config { set_sheet_id, show } => {
            let mut config = config;

            if let Some(id) = set_sheet_id {
                config.set_sheet_id(id)?;
                println!("✔ シートIDを設定しました");
            }

            if show {
                println!("設定:");
                println!("  シートID: {}", config.sheet_id()?);
                println!("  作品タブ: {}", config.works_tab);
                println!("  代替タブ: {}", config.fallback_tab);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_card(card: &WorkCard) {
    let work = &card.work;
    let star = if work.featured { "★" } else { " " };
    let year = if work.year.is_empty() { "----" } else { work.year.as_str() };
    println!("{} {} {} [{}] {}", star, year, work.title, card.category, card.accent);
    if card.has_detail_page {
        println!("    → {}", card.url);
    }
}

use clap::Parser;
use minesweeper::{cli, client, config, error, workflow};
use minesweeper_common::{Query, ResultReport};
use cli::{Cli, Commands};
use client::BackendClient;
use config::Config;
use error::Result;

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?.with_env_override(cli.base_url.clone());

    match cli.command {
        Commands::Search { query, json } => {
            let query = Query::parse(&query)?;
            let client = BackendClient::new(&config)?;
            let candidates = workflow::search(&client, &query).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&candidates)?);
            } else {
                println!("🔍 「{}」的搜尋結果\n", query);
                for (i, candidate) in candidates.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, workflow::candidate_label(candidate));
                    println!("    place_id: {}", candidate.place_id);
                }
            }
        }

        Commands::Analyze { place_id, json } => {
            let client = BackendClient::new(&config)?;
            let result = workflow::analyze(&client, &place_id).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", ResultReport::from(&result));
            }
        }

        Commands::Run { query } => {
            let client = BackendClient::new(&config)?;
            let result = workflow::run_interactive(&client, query).await?;
            println!("\n{}", ResultReport::from(&result));
        }

        Commands::Config { set_base_url, show } => {
            // 環境変数・フラグの上書きは保存しない
            let path = Config::config_path()?;
            let mut stored = Config::load_from(&path)?;

            if let Some(url) = set_base_url {
                stored.set_base_url(url)?;
                stored.save_to(&path)?;
                println!("✔ 已儲存後端網址");
            }

            if show {
                println!("設定:");
                println!("  後端網址: {}", stored.base_url);
                if stored.base_url != config.base_url {
                    println!("  (目前使用: {})", config.base_url);
                }
                println!("  逾時: {}秒", stored.timeout_seconds);
                println!("  設定檔: {}", path.display());
            }
        }
    }

    Ok(())
}

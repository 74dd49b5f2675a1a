mod display;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use lexdesk_client::{Dashboard, HttpLegalApi, Tab};
use lexdesk_core::catalog::ALL_DOCUMENTS;
use lexdesk_core::{ApiConfig, Deadline, PriorityPolicy};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lexdesk",
    version,
    about = "Legal assistant: articles, court practice, documents, deadlines"
)]
struct Cli {
    /// TOML file with endpoint URLs and display policy.
    #[arg(long, global = true, env = "LEXDESK_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, global = true, env = "LEXDESK_ARTICLES_URL")]
    articles_url: Option<String>,

    #[arg(long, global = true, env = "LEXDESK_DOCUMENTS_URL")]
    documents_url: Option<String>,

    #[arg(long, global = true, env = "LEXDESK_PRACTICE_URL")]
    practice_url: Option<String>,

    /// Where deadline tiers come from.
    #[arg(long, global = true, env = "LEXDESK_PRIORITY", value_enum)]
    priority: Option<PolicyArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search articles; a blank query shows the frequently used list.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show full detail for one article.
    Article {
        code: String,
        /// Also list court practice for the article.
        #[arg(long)]
        practice: bool,
    },
    /// Court practice for an article code.
    Practice { code: String },
    /// Document library, optionally filtered by category.
    Documents {
        #[arg(long, default_value = ALL_DOCUMENTS)]
        category: String,
    },
    /// Procedural deadlines from a JSON file.
    Deadlines {
        #[arg(long)]
        file: PathBuf,
        /// Reference date (defaults to the local date).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Derived,
    Stored,
}

impl From<PolicyArg> for PriorityPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Derived => PriorityPolicy::Derived,
            PolicyArg::Stored => PriorityPolicy::Stored,
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then flags and environment.
    fn api_config(&self) -> anyhow::Result<ApiConfig> {
        let mut config = match &self.config {
            Some(path) => {
                ApiConfig::load(path).with_context(|| format!("loading {}", path.display()))?
            }
            None => ApiConfig::default(),
        };
        if let Some(url) = &self.articles_url {
            config.articles_url = url.clone();
        }
        if let Some(url) = &self.documents_url {
            config.documents_url = url.clone();
        }
        if let Some(url) = &self.practice_url {
            config.practice_url = Some(url.clone());
        }
        if let Some(p) = self.priority {
            config.priority_policy = p.into();
        }
        Ok(config)
    }
}

fn load_deadlines(path: &std::path::Path) -> anyhow::Result<Vec<Deadline>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let deadlines = serde_json::from_str(&text)
        .with_context(|| format!("parsing deadlines in {}", path.display()))?;
    Ok(deadlines)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.api_config()?;
    tracing::debug!(?config, "resolved config");

    let api = Arc::new(HttpLegalApi::new(config.clone()));
    let mut dash = Dashboard::new(api, &config);

    match cli.command {
        Command::Search { query } => {
            dash.switch_to(Tab::Search);
            dash.search.load_catalog().await;
            dash.search.search(&query).await;
            display::print_article_list(
                &dash.search.query(),
                &dash.search.results(),
                &dash.search.display_articles(),
            );
        }
        Command::Article { code, practice } => {
            dash.switch_to(Tab::Search);
            match dash.search.select_by_code(&code).await {
                Some(article) => {
                    display::print_article_card(&article);
                    if practice && let Some(result) = dash.practice_for_selected().await {
                        println!();
                        display::print_practice(
                            &article.code,
                            dash.article_practice.outcome(),
                            &result.cases,
                        );
                    }
                }
                None => println!("Статья {code} не найдена"),
            }
        }
        Command::Practice { code } => {
            dash.switch_to(Tab::Practice);
            dash.practice.lookup(&code).await;
            display::print_practice(&code, dash.practice.outcome(), &dash.practice.cases());
        }
        Command::Documents { category } => {
            dash.switch_to(Tab::Documents);
            dash.documents.load().await;
            dash.documents.select_category(&category);
            display::print_documents(&dash.documents);
        }
        Command::Deadlines { file, today } => {
            dash.switch_to(Tab::Deadlines);
            dash.deadlines.set_deadlines(load_deadlines(&file)?);
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            display::print_deadlines(&dash.deadlines, today);
        }
    }

    Ok(())
}

use clap::{Args, Parser, Subcommand};
use reqwest::Url;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    ServerError { status: String, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "flashcards-cli", about = "Flashcards REST API CLI")]
struct Cli {
    #[arg(long, env = "FLASHCARDS_BASE_URL", default_value = "http://127.0.0.1:9090")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Category(CategoryCommand),
    Word(WordCommand),
}

#[derive(Args, Debug)]
struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    skip: Option<u32>,
    /// `"<field> <asc|desc>"`; may repeat.
    #[arg(long = "order-by")]
    order_by: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum CategorySubcommand {
    List(ListArgs),
    Get {
        name: String,
    },
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Delete {
        name: String,
    },
}

#[derive(Args, Debug)]
struct WordCommand {
    #[command(subcommand)]
    command: WordSubcommand,
}

#[derive(Subcommand, Debug)]
enum WordSubcommand {
    List {
        category: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Category(category) => run_category(&ctx, category).await,
        Command::Word(word) => run_word(&ctx, word).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let url = build_url(&cli.base_url, &["healthz"], &[])?;
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: format!("HTTP {}", status.as_u16()),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_category(cli: &CliContext, category: CategoryCommand) -> Result<(), CliError> {
    let json = match category.command {
        CategorySubcommand::List(list) => {
            let url = build_url(&cli.base_url, &["api", "categories"], &list_query(&list))?;
            api_request(reqwest::Method::GET, url, None).await?
        }
        CategorySubcommand::Get { name } => {
            let url = build_url(&cli.base_url, &["api", "categories", &name], &[])?;
            api_request(reqwest::Method::GET, url, None).await?
        }
        CategorySubcommand::Add { name, description } => {
            let url = build_url(&cli.base_url, &["api", "categories"], &[])?;
            let body = json!({ "name": name, "description": description, "amount": 0 });
            api_request(reqwest::Method::POST, url, Some(body)).await?
        }
        CategorySubcommand::Delete { name } => {
            let url = build_url(&cli.base_url, &["api", "categories", &name], &[])?;
            api_request(reqwest::Method::DELETE, url, None).await?
        }
    };
    print_json(&json)
}

async fn run_word(cli: &CliContext, word: WordCommand) -> Result<(), CliError> {
    match word.command {
        WordSubcommand::List { category, list } => {
            let url = build_url(&cli.base_url, &["api", "categories", &category, "words"], &list_query(&list))?;
            let json = api_request(reqwest::Method::GET, url, None).await?;
            print_json(&json)
        }
    }
}

fn list_query(list: &ListArgs) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(limit) = list.limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(skip) = list.skip {
        pairs.push(("skip", skip.to_string()));
    }
    for order in &list.order_by {
        pairs.push(("order_by", order.clone()));
    }
    pairs
}

/// Join `segments` onto `base`, percent-encoding each one as a single path
/// segment, then append `query` pairs.
fn build_url(base: &str, segments: &[&str], query: &[(&str, String)]) -> Result<Url, CliError> {
    let mut url = Url::parse(base).map_err(|e| CliError::InvalidBaseUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| CliError::InvalidBaseUrl(base.to_owned()))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

async fn api_request(method: reqwest::Method, url: Url, body: Option<Value>) -> Result<Value, CliError> {
    let request = reqwest::Client::new().request(method, url);
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: format!("HTTP {}", status.as_u16()), message: value.to_string() });
    }

    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

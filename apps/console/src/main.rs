mod config;
mod main_lib;
mod repl;

use config::Config;
use main_lib::{build_session, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);
    let session = build_session(&config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(session, stdin, std::io::stdout()).await
}

//! Comic Poster
//!
//! ランダムな xkcd コミックを VK コミュニティに投稿

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use comic_poster::adapter::config::Config;
use comic_poster::driver::{Args, ComicPostWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let _args = Args::parse();

    // Secrets come from the environment, optionally seeded by a local .env
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let workflow = ComicPostWorkflow::new(config);
    workflow.execute().await?;

    Ok(())
}

//! CLI Argument Parsing
//!
//! CLIの引数解析（フラグなし。`--help` と `--version` のみ）

use clap::Parser;

/// ランダムな xkcd コミックをコミュニティのウォールに投稿するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "comic-poster", version)]
#[command(
    about = "Post a random xkcd comic to a VK community wall",
    long_about = "Post a random xkcd comic to a VK community wall.\n\n\
                  Reads VK_ACCESS_TOKEN and VK_GROUP_ID from the environment or a local .env file."
)]
pub struct Args {}

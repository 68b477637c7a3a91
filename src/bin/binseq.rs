use std::{
    io::{BufWriter, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 挿入・削除・区間反転・区間和のコマンドを読み, 和を1行ずつ出力する
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 入力ファイル. 省略時は標準入力
    input: Option<PathBuf>,

    /// 各コマンドの後に木の構造を出力する
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let stdout = std::io::stdout();
    let tree = binseq::command::run(&input, BufWriter::new(stdout.lock()), args.dump)?;
    info!(len = tree.len(), "finished");
    Ok(())
}

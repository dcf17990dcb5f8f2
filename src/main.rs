use clap::Parser;
use rfdetr_seg_export::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::export::run(cli)
}

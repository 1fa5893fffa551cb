use clap::Parser;

use lsb_stego::{
    cli::{Cli, Commands},
    handler::{
        handle_capacity, handle_hide_file, handle_hide_text, handle_recover_file,
        handle_recover_text,
    },
};

/// 程序的主入口点
///
/// 负责解析命令行参数、初始化日志，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::HideText(args) => handle_hide_text(args),
        Commands::RecoverText(args) => handle_recover_text(args),
        Commands::HideFile(args) => handle_hide_file(args),
        Commands::RecoverFile(args) => handle_recover_file(args),
        Commands::Capacity(args) => handle_capacity(args),
    }
}

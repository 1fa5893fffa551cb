//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (PNG, BMP) 中隐藏或恢复文本和文件。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (PNG, BMP) 中隐藏或恢复文本和文件。\n\
                  数据写入每个像素 R, G, B 通道的最低位，Alpha 通道保持不变。"
)]
pub struct Cli {
    /// 输出调试日志 (等同于 RUST_LOG=debug)。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 在图像中隐藏一条文本消息。
    HideText(HideTextArgs),

    /// 从经过隐写的图像中恢复文本消息。
    RecoverText(RecoverTextArgs),

    /// 在图像中隐藏任意文件的内容。
    HideFile(HideFileArgs),

    /// 从经过隐写的图像中恢复文件。
    RecoverFile(RecoverFileArgs),

    /// 显示图像可以容纳的最大载荷。
    Capacity(CapacityArgs),
}

/// 'hide-text' 命令所需的参数。
#[derive(Args, Debug)]
pub struct HideTextArgs {
    /// 用于隐写的输入图像文件路径 (PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本消息。
    #[arg(short, long)]
    pub message: String,

    /// 结果图像的输出路径，默认为输入图像旁的 `doctored_<名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'recover-text' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverTextArgs {
    /// 已隐藏文本的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 保存恢复文本的路径；省略时直接打印到标准输出。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'hide-file' 命令所需的参数。
#[derive(Args, Debug)]
pub struct HideFileArgs {
    /// 用于隐写的输入图像文件路径 (PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文件路径。
    #[arg(short, long)]
    pub file: PathBuf,

    /// 结果图像的输出路径，默认为输入图像旁的 `doctored_<名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'recover-file' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverFileArgs {
    /// 已隐藏文件的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文件的保存路径，默认为图像旁的 `recovered_<名称>.bin`。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}

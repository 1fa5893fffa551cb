//! # 命令处理逻辑模块
//!
//! 包含各子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::capacity::Capacity;
use crate::cli::{CapacityArgs, HideFileArgs, HideTextArgs, RecoverFileArgs, RecoverTextArgs};
use crate::image_io::{load_image, save_image};
use crate::payload::{embed_file, embed_text, extract_file, extract_text};
use crate::raster::Image;
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 在输入图像旁生成带前缀的默认输出路径。
fn sibling_path(image: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{prefix}_{stem}.{extension}"))
}

/// 未指定 `--force` 时拒绝覆盖已存在的文件。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn read_carrier(path: &Path) -> Result<Image> {
    load_image(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

fn write_carrier(image: &Image, path: &Path) -> Result<()> {
    let format = save_image(image, path).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    info!("wrote {format} image to {}", path.display());
    Ok(())
}

/// 处理 'hide-text' 命令的执行逻辑。
///
/// 读取图像、把消息隐藏到图像副本中，并把结果写入目标图像文件。
///
/// # Errors
///
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入图像，或图像不是 PNG/BMP。
/// * 消息为空或超出图像容量。
/// * 无法写入目标图像文件。
pub fn handle_hide_text(args: HideTextArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| sibling_path(&args.image, "doctored", "png"));
    ensure_writable(&dest, args.force)?;

    let carrier = read_carrier(&args.image)?;
    let stego = embed_text(&carrier, &args.message).with_context(|| {
        format!(
            "Failed to hide the message in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    write_carrier(&stego, &dest)?;

    info!("hid {} bytes of text in {}", args.message.len(), dest.display());
    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'recover-text' 命令的执行逻辑。
///
/// 未指定输出路径时把恢复的文本打印到标准输出。
///
/// # Errors
///
/// * 无法读取输入图像，或图像中没有隐藏数据。
/// * 隐藏数据不是 UTF-8 文本。
/// * 无法写入目标文本文件。
pub fn handle_recover_text(args: RecoverTextArgs) -> Result<()> {
    if let Some(path) = &args.text {
        ensure_writable(path, args.force)?;
    }

    let carrier = read_carrier(&args.image)?;
    let text = extract_text(&carrier).with_context(|| {
        format!(
            "Failed to recover text from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match args.text {
        Some(path) => {
            fs::write(&path, &text).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The text has been successfully recovered and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// 处理 'hide-file' 命令的执行逻辑。
///
/// # Errors
///
/// * 目标文件已存在且未指定 `--force`。
/// * 输入图像或待隐藏文件不存在、为空或无法读取。
/// * 文件超出图像容量。
/// * 无法写入目标图像文件。
pub fn handle_hide_file(args: HideFileArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| sibling_path(&args.image, "doctored", "png"));
    ensure_writable(&dest, args.force)?;

    let carrier = read_carrier(&args.image)?;
    let stego = embed_file(&carrier, &args.file).with_context(|| {
        format!(
            "Failed to hide file {} in the image",
            args.file.to_string_lossy().red().bold()
        )
    })?;
    write_carrier(&stego, &dest)?;

    info!("hid {} in {}", args.file.display(), dest.display());
    println!(
        "The file has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'recover-file' 命令的执行逻辑。
///
/// # Errors
///
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入图像，或图像中没有隐藏数据。
/// * 无法写入目标文件。
pub fn handle_recover_file(args: RecoverFileArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| sibling_path(&args.image, "recovered", "bin"));
    ensure_writable(&output, args.force)?;

    let carrier = read_carrier(&args.image)?;
    let bytes = extract_file(&carrier).with_context(|| {
        format!(
            "Failed to recover a file from '{}'. \nThe image may not contain a hidden file or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&output, &bytes).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    info!("recovered {} bytes into {}", bytes.len(), output.display());
    println!(
        "The file has been successfully recovered and saved: {}",
        output.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'capacity' 命令：打印图像的容量。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let carrier = read_carrier(&args.image)?;
    let capacity = Capacity::of(&carrier);

    println!(
        "{}x{} image: {} usable bits, up to {} payload bytes",
        capacity.width,
        capacity.height,
        capacity.capacity_bits.to_string().green().bold(),
        capacity.max_payload_bytes.to_string().green().bold()
    );
    Ok(())
}

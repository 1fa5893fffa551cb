//! # 图像读写边界模块
//!
//! 使用 `image` crate 在磁盘文件与 [`Image`] 之间转换。
//! 只接受 PNG 和 BMP，其他容器在解码或写入之前就被拒绝。

use crate::error::{Result, StegoError};
use crate::raster::{Image, RasterFormat};
use image::{ExtendedColorType, ImageFormat, ImageReader};
use log::debug;
use std::path::Path;

impl From<ImageFormat> for RasterFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => RasterFormat::Png,
            ImageFormat::Bmp => RasterFormat::Bmp,
            other => RasterFormat::Other(format!("{other:?}").to_uppercase()),
        }
    }
}

fn to_image_format(format: &RasterFormat) -> Result<ImageFormat> {
    match format {
        RasterFormat::Png => Ok(ImageFormat::Png),
        RasterFormat::Bmp => Ok(ImageFormat::Bmp),
        RasterFormat::Other(name) => Err(StegoError::UnsupportedFormat(name.clone())),
    }
}

/// 按文件内容的魔数识别格式并解码为 8 位 RGB 或 RGBA 缓冲区。
///
/// # Errors
///
/// * 文件不存在：`FileNotFound`。
/// * 不是 PNG 或 BMP：`UnsupportedFormat`，此时不会解码。
/// * 读取或解码失败：`Io` 或 `Image`。
pub fn load_image(path: &Path) -> Result<Image> {
    if !path.exists() {
        return Err(StegoError::FileNotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader
        .format()
        .map(RasterFormat::from)
        .unwrap_or_else(|| RasterFormat::Other("unknown".to_string()));
    format.ensure_lossless()?;

    let decoded = reader.decode()?;
    let (width, height) = (decoded.width(), decoded.height());
    debug!(
        "loaded {} {width}x{height} {:?} from {}",
        format,
        decoded.color(),
        path.display()
    );

    if decoded.color().has_alpha() {
        Image::new(width, height, 4, decoded.into_rgba8().into_raw(), format)
    } else {
        Image::new(width, height, 3, decoded.into_rgb8().into_raw(), format)
    }
}

/// 按输出路径的扩展名选择容器格式并保存图像，返回实际写入的格式。
///
/// # Errors
///
/// 扩展名不是 `.png` 或 `.bmp` 时返回 `UnsupportedFormat`，且不会写入任何内容。
pub fn save_image(image: &Image, path: &Path) -> Result<RasterFormat> {
    let format = ImageFormat::from_path(path)
        .map(RasterFormat::from)
        .unwrap_or_else(|_| {
            RasterFormat::Other(
                path.extension()
                    .map(|ext| ext.to_string_lossy().to_uppercase())
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        });
    let target = to_image_format(&format)?;

    let color = if image.has_alpha() {
        ExtendedColorType::Rgba8
    } else {
        ExtendedColorType::Rgb8
    };

    image::save_buffer_with_format(
        path,
        image.samples(),
        image.width(),
        image.height(),
        color,
        target,
    )?;
    debug!("saved {} image to {}", format, path.display());

    Ok(format)
}

//! # 图像值类型模块
//!
//! 定义与具体图像库无关的像素缓冲区 [`Image`]。
//! 解码与编码由 [`crate::image_io`] 在边界处完成。

use crate::constants::{COLOR_CHANNELS, RGBA_CHANNELS};
use crate::error::{Result, StegoError};
use std::fmt;

/// 图像的容器格式。只有无损格式可以承载 LSB 数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Bmp,
    /// 其他任何格式，保存其名称以便报告错误。
    Other(String),
}

impl RasterFormat {
    pub fn is_lossless(&self) -> bool {
        matches!(self, RasterFormat::Png | RasterFormat::Bmp)
    }

    /// 格式不受支持时返回 `UnsupportedFormat`。
    pub fn ensure_lossless(&self) -> Result<()> {
        if self.is_lossless() {
            Ok(())
        } else {
            Err(StegoError::UnsupportedFormat(self.to_string()))
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterFormat::Png => f.write_str("PNG"),
            RasterFormat::Bmp => f.write_str("BMP"),
            RasterFormat::Other(name) => f.write_str(name),
        }
    }
}

/// 行优先、通道交错的 8 位像素缓冲区。
///
/// `channels` 是缓冲区中每个像素的样本数 (3 或 4)。
/// 第 4 个样本是 Alpha，隐写时始终跳过。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: usize,
    samples: Vec<u8>,
    format: RasterFormat,
}

impl Image {
    /// 校验尺寸与缓冲区长度后构造图像。
    ///
    /// # Errors
    ///
    /// * `channels` 不是 3 或 4。
    /// * `samples.len()` 不等于 `width * height * channels`。
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        samples: Vec<u8>,
        format: RasterFormat,
    ) -> Result<Self> {
        if channels != COLOR_CHANNELS && channels != RGBA_CHANNELS {
            return Err(StegoError::InvalidImage(format!(
                "expected 3 or 4 samples per pixel, got {channels}"
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or_else(|| {
                StegoError::InvalidImage(format!("dimensions {width}x{height} overflow"))
            })?;

        if samples.len() != expected {
            return Err(StegoError::InvalidImage(format!(
                "{width}x{height}x{channels} needs {expected} samples, buffer holds {}",
                samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
            format,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 缓冲区中每个像素的样本数，包括 Alpha。
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == RGBA_CHANNELS
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn format(&self) -> &RasterFormat {
        &self.format
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// 以新的样本缓冲区构造同尺寸、同格式的图像。
    pub(crate) fn with_samples(&self, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), self.samples.len());
        Self {
            samples,
            format: self.format.clone(),
            ..*self
        }
    }
}

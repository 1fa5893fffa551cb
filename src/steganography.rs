//! # 隐写编解码模块
//!
//! 把容量规划、位帧和通道样本流组合为两个纯函数：
//! [`embed`] 返回一张新图像，[`extract`] 返回隐藏的字节。
//!
//! 长度头部恰好解码为一个合理的小数值时，无法与真实载荷区分，
//! 这是该格式固有的误判风险。

use crate::capacity;
use crate::error::{Result, StegoError};
use crate::framer::{frame_decode, write_frame};
use crate::raster::Image;
use crate::stream::PixelChannelStream;
use log::{debug, info};

/// 在图像副本的最低有效位中隐藏 `payload`。
///
/// 所有校验都在修改之前完成，失败时输入图像保持原样。
/// 帧化区域之外的样本与输入逐位相同。
///
/// # Errors
///
/// * 图像不是 PNG 或 BMP：`UnsupportedFormat`。
/// * 载荷为空：`EmptyPayload`。
/// * 载荷超出容量：`CapacityExceeded`。
pub fn embed(image: &Image, payload: &[u8]) -> Result<Image> {
    image.format().ensure_lossless()?;

    if payload.is_empty() {
        return Err(StegoError::EmptyPayload);
    }

    capacity::ensure_fits(image, payload.len())?;

    let mut stream = PixelChannelStream::new(image.samples().to_vec(), image.channels())?;
    let written = write_frame(&mut stream, payload)?;
    debug!(
        "wrote {written} bits into {}x{} image, {} samples left untouched",
        image.width(),
        image.height(),
        stream.remaining_capacity()
    );

    info!("embedded {} bytes", payload.len());
    Ok(image.with_samples(stream.into_inner()))
}

/// 从图像中恢复隐藏的字节。
///
/// # Errors
///
/// * 图像不是 PNG 或 BMP：`UnsupportedFormat`。
/// * 头部与容量不一致、头部为 0 或样本不足：`NoHiddenData`。
pub fn extract(image: &Image) -> Result<Vec<u8>> {
    image.format().ensure_lossless()?;

    let mut stream = PixelChannelStream::new(image.samples(), image.channels())?;
    let payload = match frame_decode(&mut stream) {
        Ok(payload) => payload,
        Err(err @ (StegoError::CorruptHeader { .. } | StegoError::StreamExhausted { .. })) => {
            debug!("no hidden data: {err}");
            return Err(StegoError::NoHiddenData);
        }
        Err(err) => return Err(err),
    };

    // embed 从不写入空载荷
    if payload.is_empty() {
        debug!("no hidden data: length header is zero");
        return Err(StegoError::NoHiddenData);
    }

    info!("extracted {} bytes", payload.len());
    Ok(payload)
}

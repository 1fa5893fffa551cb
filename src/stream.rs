//! # 通道样本流模块
//!
//! 把图像的颜色通道样本呈现为一条按固定顺序排列的位介质：
//! 像素按行优先扫描，像素内按 R, G, B 顺序，Alpha 永远跳过。
//! 该扫描顺序是线上格式的一部分，改变它会破坏与已有隐写图像的兼容性。

use crate::constants::{COLOR_CHANNELS, RGBA_CHANNELS};
use crate::error::{Result, StegoError};

/// 颜色通道样本上的游标。
///
/// `B` 为只读切片时只能读取；为可变切片或 `Vec<u8>` 时还可以写入。
#[derive(Debug)]
pub struct PixelChannelStream<B> {
    samples: B,
    channels: usize,
    len: usize,
    position: usize,
}

impl<B: AsRef<[u8]>> PixelChannelStream<B> {
    /// 在交错存储的样本缓冲区上创建游标，`channels` 为每像素的样本数。
    ///
    /// # Errors
    ///
    /// `channels` 不是 3 或 4 时返回 `InvalidImage`。
    pub fn new(samples: B, channels: usize) -> Result<Self> {
        if channels != COLOR_CHANNELS && channels != RGBA_CHANNELS {
            return Err(StegoError::InvalidImage(format!(
                "expected 3 or 4 samples per pixel, got {channels}"
            )));
        }

        let pixels = samples.as_ref().len() / channels;
        Ok(Self {
            samples,
            channels,
            len: pixels * COLOR_CHANNELS,
            position: 0,
        })
    }

    /// 返回当前样本的最低有效位并前进一步。
    pub fn read_bit(&mut self) -> Result<bool> {
        let index = self.advance()?;
        Ok(self.samples.as_ref()[index] & 1 == 1)
    }

    /// 游标之后尚未访问的颜色通道样本数。
    pub fn remaining_capacity(&self) -> usize {
        self.len - self.position
    }

    /// 已经访问过的颜色通道样本数。
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_inner(self) -> B {
        self.samples
    }

    /// 把扫描位置映射为缓冲区下标，跳过 Alpha。
    fn advance(&mut self) -> Result<usize> {
        if self.position >= self.len {
            return Err(StegoError::StreamExhausted {
                position: self.position,
            });
        }

        let pixel = self.position / COLOR_CHANNELS;
        let channel = self.position % COLOR_CHANNELS;
        self.position += 1;

        Ok(pixel * self.channels + channel)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PixelChannelStream<B> {
    /// 把当前样本的最低有效位设为 `bit`，高 7 位保持不变，并前进一步。
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        let index = self.advance()?;
        let sample = &mut self.samples.as_mut()[index];
        *sample = (*sample & 0xFE) | u8::from(bit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_touches_only_the_lowest_bit() {
        let mut stream = PixelChannelStream::new(vec![0xF0u8, 0x0F, 0xAA], 3).unwrap();
        stream.write_bit(true).unwrap();
        stream.write_bit(false).unwrap();
        stream.write_bit(true).unwrap();

        assert_eq!(stream.into_inner(), vec![0xF1, 0x0E, 0xAB]);
    }

    #[test]
    fn alpha_is_skipped() {
        // 两个 RGBA 像素，Alpha 为 0x80
        let samples = vec![0u8, 0, 0, 0x80, 0, 0, 0, 0x80];
        let mut stream = PixelChannelStream::new(samples, 4).unwrap();
        assert_eq!(stream.remaining_capacity(), 6);

        for _ in 0..6 {
            stream.write_bit(true).unwrap();
        }

        assert_eq!(
            stream.into_inner(),
            vec![1, 1, 1, 0x80, 1, 1, 1, 0x80],
            "alpha samples must be left untouched"
        );
    }

    #[test]
    fn reads_follow_scan_order() {
        let samples = [1u8, 0, 1, 0xFF, 0, 1, 1, 0xFE];
        let mut stream = PixelChannelStream::new(&samples[..], 4).unwrap();

        let bits: Vec<bool> = (0..6).map(|_| stream.read_bit().unwrap()).collect();
        assert_eq!(bits, vec![true, false, true, false, true, true]);
    }

    #[test]
    fn channel_counts_other_than_rgb_or_rgba_are_rejected() {
        for channels in [0, 1, 2, 5] {
            assert!(matches!(
                PixelChannelStream::new(vec![0u8; 3], channels),
                Err(StegoError::InvalidImage(_))
            ));
        }
    }

    #[test]
    fn write_past_the_end_leaves_buffer_unchanged() {
        let mut stream = PixelChannelStream::new(vec![0x10u8, 0x20, 0x30, 0x40], 4).unwrap();
        for _ in 0..3 {
            stream.write_bit(true).unwrap();
        }

        assert!(matches!(
            stream.write_bit(false),
            Err(StegoError::StreamExhausted { position: 3 })
        ));
        assert_eq!(stream.into_inner(), vec![0x11, 0x21, 0x31, 0x40]);
    }

    #[test]
    fn exhausted_stream_reports_position() {
        let samples = [0u8; 3];
        let mut stream = PixelChannelStream::new(&samples[..], 3).unwrap();
        for _ in 0..3 {
            stream.read_bit().unwrap();
        }

        assert_eq!(stream.remaining_capacity(), 0);
        assert!(matches!(
            stream.read_bit(),
            Err(StegoError::StreamExhausted { position: 3 })
        ));
    }
}

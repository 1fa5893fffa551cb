//! # 位帧模块
//!
//! 载荷在写入图像前被组织为：32 bits 大端序长度头部 (载荷字节数)，
//! 紧随其后是每个载荷字节，高位在前。

use crate::constants::{BITS_PER_BYTE, HEADER_BITS};
use crate::error::{Result, StegoError};
use crate::stream::PixelChannelStream;
use log::debug;

/// 帧化 `payload_len` 个字节所需的总位数 (含头部)。
pub fn framed_bits(payload_len: usize) -> u64 {
    HEADER_BITS + payload_len as u64 * BITS_PER_BYTE
}

/// 把一个字节拆为 8 个位，高位在前。
fn bits_msb_first(byte: u8) -> impl Iterator<Item = bool> {
    (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1)
}

/// 生成载荷的帧化位序列：32 位长度头部，然后是载荷位。
///
/// # Errors
///
/// 载荷长度无法用 `u32` 表示时返回 `CapacityExceeded`。
pub fn frame_encode(payload: &[u8]) -> Result<impl Iterator<Item = bool> + '_> {
    let len = u32::try_from(payload.len()).map_err(|_| StegoError::CapacityExceeded {
        required_bits: framed_bits(payload.len()),
        available_bits: HEADER_BITS + u64::from(u32::MAX) * BITS_PER_BYTE,
    })?;

    Ok(len
        .to_be_bytes()
        .into_iter()
        .chain(payload.iter().copied())
        .flat_map(bits_msb_first))
}

/// 把位序列写入样本流，返回写入的位数。
pub fn write_frame<B>(stream: &mut PixelChannelStream<B>, payload: &[u8]) -> Result<u64>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let mut written = 0;
    for bit in frame_encode(payload)? {
        stream.write_bit(bit)?;
        written += 1;
    }
    Ok(written)
}

fn read_byte<B: AsRef<[u8]>>(stream: &mut PixelChannelStream<B>) -> Result<u8> {
    (0..8).try_fold(0u8, |acc, _| Ok((acc << 1) | u8::from(stream.read_bit()?)))
}

/// 从样本流中解析帧：读取长度头部，再读取恰好 `n` 个字节。
///
/// # Errors
///
/// * 头部声明的长度超过剩余样本所能容纳的字节数时返回 `CorruptHeader`，
///   此时不会再读取任何载荷位。
/// * 样本不足 32 个时返回 `StreamExhausted`。
pub fn frame_decode<B: AsRef<[u8]>>(stream: &mut PixelChannelStream<B>) -> Result<Vec<u8>> {
    let mut header = [0u8; 4];
    for byte in header.iter_mut() {
        *byte = read_byte(stream)?;
    }

    let declared_bytes = u64::from(u32::from_be_bytes(header));
    let available_bytes = stream.remaining_capacity() as u64 / BITS_PER_BYTE;
    debug!("decoded length header: {declared_bytes} bytes, {available_bytes} bytes available");

    if declared_bytes > available_bytes {
        return Err(StegoError::CorruptHeader {
            declared_bytes,
            available_bytes,
        });
    }

    (0..declared_bytes).map(|_| read_byte(stream)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_big_endian_and_msb_first() {
        let bits: Vec<bool> = frame_encode(&[0xA5; 5]).unwrap().collect();
        assert_eq!(bits.len() as u64, framed_bits(5));

        // 长度 5 = 0b...0101，前 29 位为 0
        assert!(bits[..29].iter().all(|&bit| !bit));
        assert_eq!(&bits[29..32], &[true, false, true]);

        // 0xA5 = 1010_0101
        assert_eq!(
            &bits[32..40],
            &[true, false, true, false, false, true, false, true]
        );
    }

    #[test]
    fn decodes_what_was_written() {
        let payload = [0x00, 0xFF, 0x42, 0x80, 0x01];
        let mut stream = PixelChannelStream::new(vec![0u8; 3 * 40], 3).unwrap();
        let written = write_frame(&mut stream, &payload).unwrap();
        assert_eq!(written, framed_bits(payload.len()));

        let samples = stream.into_inner();
        let mut reader = PixelChannelStream::new(&samples[..], 3).unwrap();
        assert_eq!(frame_decode(&mut reader).unwrap(), payload);
        assert_eq!(reader.position() as u64, written);
    }

    #[test]
    fn oversized_header_is_rejected_before_reading_payload() {
        // 所有 LSB 为 1，头部解码为 u32::MAX
        let samples = vec![0xFFu8; 3 * 20];
        let mut reader = PixelChannelStream::new(&samples[..], 3).unwrap();

        let result = frame_decode(&mut reader);
        assert!(matches!(
            result,
            Err(StegoError::CorruptHeader {
                declared_bytes: 0xFFFF_FFFF,
                available_bytes: 3,
            })
        ));
        assert_eq!(reader.position() as u64, HEADER_BITS);
    }

    #[test]
    fn short_stream_cannot_hold_a_header() {
        let samples = [0u8; 30];
        let mut reader = PixelChannelStream::new(&samples[..], 3).unwrap();
        assert!(matches!(
            frame_decode(&mut reader),
            Err(StegoError::StreamExhausted { position: 30 })
        ));
    }
}

//! # 文本编解码
//!
//! 以显式指定的字符编码读取与写回文档，读写始终使用同一编码。
//!
//! - 解码不做 BOM 处理：UTF-8 BOM 作为文本的一部分保留并原样写回
//! - 解码遇到非法字节即报 `EncodingError`，不做替换
//! - 编码遇到目标编码无法表示的字符即报 `DocumentWriteError`
//!
//! ## 依赖关系
//! - 被 `engine/replacer.rs` 使用
//! - 使用 `encoding_rs` crate

use crate::error::{RebrandError, Result};

use encoding_rs::{Encoding, UTF_8};
use std::io;
use std::path::Path;

/// 文本编解码器
#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}

impl TextCodec {
    /// 根据 WHATWG 标签创建编解码器（如 `utf-8`, `windows-1252`, `gbk`）
    ///
    /// 只接受可以用自身写回的编码；UTF-16 系列被拒绝。
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| RebrandError::UnsupportedEncoding(label.to_string()))?;

        if encoding.output_encoding() != encoding {
            return Err(RebrandError::UnsupportedEncoding(format!(
                "{} (cannot be written back as {})",
                label,
                encoding.name()
            )));
        }

        Ok(Self { encoding })
    }

    /// 编码名称
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// 解码文档字节
    pub fn decode(&self, path: &Path, bytes: &[u8]) -> Result<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| RebrandError::EncodingError {
                path: path.display().to_string(),
                encoding: self.name().to_string(),
            })
    }

    /// 编码文本以写回
    pub fn encode(&self, path: &Path, text: &str) -> Result<Vec<u8>> {
        let (bytes, _, unmappable) = self.encoding.encode(text);
        if unmappable {
            return Err(RebrandError::DocumentWriteError {
                path: path.display().to_string(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("text contains characters not representable in {}", self.name()),
                ),
            });
        }
        Ok(bytes.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_decode_keeps_bom() {
        let codec = TextCodec::default();
        let text = codec
            .decode(Path::new("index.html"), b"\xEF\xBB\xBFCurve")
            .unwrap();
        assert_eq!(text, "\u{FEFF}Curve");
        assert_eq!(
            codec.encode(Path::new("index.html"), &text).unwrap(),
            b"\xEF\xBB\xBFCurve"
        );
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let codec = TextCodec::default();
        let err = codec
            .decode(Path::new("broken.html"), b"Curve \xFF\xFE")
            .unwrap_err();
        assert!(matches!(err, RebrandError::EncodingError { .. }));
        assert!(err.is_read_error());
    }

    #[test]
    fn test_legacy_encoding_round_trip() {
        let codec = TextCodec::for_label("latin1").unwrap();
        assert_eq!(codec.name(), "windows-1252");

        let text = codec.decode(Path::new("a.html"), b"Caf\xE9 Curve").unwrap();
        assert_eq!(text, "Café Curve");
        assert_eq!(
            codec.encode(Path::new("a.html"), "Café x3dental").unwrap(),
            b"Caf\xE9 x3dental"
        );
    }

    #[test]
    fn test_unmappable_text_is_write_error() {
        let codec = TextCodec::for_label("windows-1252").unwrap();
        let err = codec.encode(Path::new("a.html"), "牙科").unwrap_err();
        assert!(matches!(err, RebrandError::DocumentWriteError { .. }));
    }

    #[test]
    fn test_rejects_unknown_and_utf16_labels() {
        assert!(matches!(
            TextCodec::for_label("klingon"),
            Err(RebrandError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            TextCodec::for_label("utf-16le"),
            Err(RebrandError::UnsupportedEncoding(_))
        ));
    }
}

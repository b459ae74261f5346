//! Output code page classification

use serde::{Deserialize, Serialize};

/// A Windows-style code page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodePage(pub u32);

impl CodePage {
    /// OEM United States
    pub const US: CodePage = CodePage(437);
    pub const UTF8: CodePage = CodePage(65001);
    /// Japanese (Shift-JIS)
    pub const JAPANESE: CodePage = CodePage(932);
    /// Simplified Chinese (GBK)
    pub const SIMPLIFIED_CHINESE: CodePage = CodePage(936);
    /// Korean (Unified Hangul)
    pub const KOREAN: CodePage = CodePage(949);
    /// Traditional Chinese (Big5)
    pub const TRADITIONAL_CHINESE: CodePage = CodePage(950);

    /// The double-byte code pages line drawing historically worked in
    pub const EAST_ASIAN: [CodePage; 4] = [
        Self::JAPANESE,
        Self::SIMPLIFIED_CHINESE,
        Self::KOREAN,
        Self::TRADITIONAL_CHINESE,
    ];

    pub fn is_east_asian(self) -> bool {
        Self::EAST_ASIAN.contains(&self)
    }
}

impl Default for CodePage {
    fn default() -> Self {
        Self::US
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_east_asian_pages() {
        for cp in [932, 936, 949, 950] {
            assert!(CodePage(cp).is_east_asian(), "{cp} should be East Asian");
        }
    }

    #[test]
    fn test_other_pages() {
        for cp in [437, 850, 1252, 65001, 0, 931, 951] {
            assert!(!CodePage(cp).is_east_asian(), "{cp} should not be East Asian");
        }
    }
}

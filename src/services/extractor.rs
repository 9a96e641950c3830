//! 汉字提取与单元归一化
//!
//! 只识别基本区 CJK 统一表意文字 (U+4E00–U+9FFF)。扩展区 A/B 及兼容表意文字
//! 中的罕用字、异体字会被直接丢弃。

use regex::Regex;
use std::sync::OnceLock;

/// 基本区汉字的起止码位
pub const CJK_START: char = '\u{4e00}';
pub const CJK_END: char = '\u{9fff}';

fn chinese_char_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{4e00}-\u{9fff}]").expect("汉字正则表达式无效"))
}

/// 判断单个字符是否为基本区汉字
pub fn is_chinese_char(c: char) -> bool {
    (CJK_START..=CJK_END).contains(&c)
}

/// 按出现顺序返回文本中的所有汉字（保留重复）
///
/// 拉丁字母、数字、标点、拼音声调符号及空白全部忽略，任何输入都不会出错。
pub fn extract_chinese_chars(text: &str) -> Vec<char> {
    chinese_char_re()
        .find_iter(text)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}

/// 将一行原始文本归一化为纯汉字串
///
/// 不去重，保持原顺序。没有汉字的行返回空串，调用方必须跳过它。
pub fn normalize_unit(line: &str) -> String {
    chinese_char_re()
        .find_iter(line)
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keeps_order_and_duplicates() {
        assert_eq!(
            extract_chinese_chars("我 wǒ, 我们! 123"),
            vec!['我', '我', '们']
        );
    }

    #[test]
    fn test_extract_empty_and_non_chinese() {
        assert!(extract_chinese_chars("").is_empty());
        assert!(extract_chinese_chars("nǐ hǎo, world! 42 （）。").is_empty());
    }

    #[test]
    fn test_extract_only_basic_block() {
        // U+20000 位于扩展区 B，U+3400 位于扩展区 A，U+F900 为兼容表意文字
        assert_eq!(
            extract_chinese_chars("\u{20000}\u{3400}\u{f900}一龥"),
            vec!['一', '龥']
        );
        assert!(is_chinese_char('\u{9fff}'));
        assert!(!is_chinese_char('\u{3400}'));
    }

    #[test]
    fn test_extract_block_boundaries() {
        assert_eq!(
            extract_chinese_chars("\u{4dff}\u{4e00}\u{9fff}\u{a000}"),
            vec!['\u{4e00}', '\u{9fff}']
        );
    }

    #[test]
    fn test_extract_matches_filtered_text() {
        let samples = [
            "你 (nǐ) 好",
            "第3课：学习-中文！",
            "ABC汉字def字",
            "\t  空白\r\n换行 ",
        ];
        for text in samples {
            let extracted: String = extract_chinese_chars(text).into_iter().collect();
            let filtered: String = text.chars().filter(|c| is_chinese_char(*c)).collect();
            assert_eq!(extracted, filtered, "输入: {}", text);
            assert!(extracted.chars().all(is_chinese_char));
        }
    }

    #[test]
    fn test_normalize_strips_annotations() {
        assert_eq!(normalize_unit("你 (nǐ) 好"), "你好");
        assert_eq!(normalize_unit("你好"), "你好");
        assert_eq!(normalize_unit("老师!"), "老师");
        assert_eq!(normalize_unit("谢谢 - xièxie - thanks"), "谢谢");
    }

    #[test]
    fn test_normalize_does_not_dedupe() {
        assert_eq!(normalize_unit("谢 谢"), "谢谢");
        assert_eq!(normalize_unit("常常"), "常常");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for line in ["你好", "你 (nǐ) 好", "一模一样", "abc"] {
            let once = normalize_unit(line);
            assert_eq!(normalize_unit(&once), once);
        }
    }

    #[test]
    fn test_normalize_without_chinese_is_empty() {
        assert_eq!(normalize_unit("hello (nǐ hǎo)"), "");
        assert_eq!(normalize_unit(""), "");
    }
}

//! 选项探测器 - 能力层
//!
//! 在题干结束位置之后的固定窗口内按顺序查找字母选项行。恰好找到 4 个
//! 才判定为选择题（有界选择题假设）；任何其他数量都返回空，表示简答题。
//!
//! 字母类覆盖 a–h，这样第 5 行（e) …）会被计入并破坏"恰好 4 个"条件，
//! 而不是被悄悄忽略。

use regex::Regex;

/// 题干之后的扫描窗口大小（字符数）
const OPTION_WINDOW_CHARS: usize = 500;
/// 判定为选择题所需的选项数量
const REQUIRED_OPTION_COUNT: usize = 4;
/// 选项文本长度下界（字符数，含）
const OPTION_MIN_CHARS: usize = 3;
/// 选项文本长度上界（字符数，含）
const OPTION_MAX_CHARS: usize = 200;

/// 选项探测器
pub struct OptionDetector {
    line_re: Regex,
}

impl OptionDetector {
    /// 创建新的选项探测器
    pub fn new() -> Self {
        Self {
            line_re: Regex::new(r"(?m)^\s*([a-hA-H])\)\s*(.+?)\s*$").unwrap(),
        }
    }

    /// 探测题干之后的选项行
    ///
    /// # 参数
    /// - `text`: 提取出的文档全文
    /// - `stem_end`: 题干在全文中的结束位置（字节偏移）
    ///
    /// # 返回
    /// 恰好找到 4 个有效选项时返回渲染后的选项列表（"a) 文本"），
    /// 否则返回空列表，表示按简答题处理
    pub fn detect(&self, text: &str, stem_end: usize) -> Vec<String> {
        let start = stem_end.min(text.len());
        let tail = &text[start..];

        // 窗口按字符数截断，避免在多字节字符中间切断
        let window = match tail.char_indices().nth(OPTION_WINDOW_CHARS) {
            Some((byte_idx, _)) => &tail[..byte_idx],
            None => tail,
        };

        let options: Vec<String> = self
            .line_re
            .captures_iter(window)
            .filter_map(|cap| {
                let letter = cap.get(1)?.as_str();
                let option_text = cap.get(2)?.as_str();

                let len = option_text.chars().count();
                if !(OPTION_MIN_CHARS..=OPTION_MAX_CHARS).contains(&len) {
                    return None;
                }

                Some(format!("{}) {}", letter, option_text))
            })
            .collect();

        if options.len() == REQUIRED_OPTION_COUNT {
            options
        } else {
            Vec::new()
        }
    }
}

impl Default for OptionDetector {
    fn default() -> Self {
        Self::new()
    }
}

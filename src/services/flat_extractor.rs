//! 独立题提取器 - 能力层
//!
//! 仅在组合题提取器一无所获时运行。对全文依次套用一组相互独立的文本
//! 模式，把所有命中合并为一个候选池：
//!
//! 1. 以问号结尾的编号列表项
//! 2. 显式 "Question:" / "問題：" 标注行
//! 3. 达到最小长度、以问号结尾的普通句子
//! 4. 括号编号列表项（（N）/ (N)）
//!
//! 候选按"模式优先、同模式内按出现位置"的固定顺序进入候选池，该顺序
//! 决定最终编号分配以及去重时"先见者胜"的归属。

use regex::Regex;

/// 独立题候选：清洗后的题干 + 原文中的结束偏移
///
/// 结束偏移供选项探测器从题干之后开始扫描。
#[derive(Debug, Clone)]
pub struct FlatCandidate {
    /// 清洗后的题干
    pub stem: String,
    /// 原始命中在全文中的结束位置（字节偏移）
    pub end_offset: usize,
}

/// 题干长度下界（清洗后字符数，开区间）
const STEM_MIN_CHARS: usize = 5;
/// 题干长度上界（清洗后字符数，开区间）
const STEM_MAX_CHARS: usize = 300;
/// 普通句子模式要求的最小长度
const BARE_SENTENCE_MIN_CHARS: usize = 10;

/// 独立题提取器
pub struct FlatExtractor {
    patterns: Vec<Regex>,
    cleanup_re: Regex,
}

impl FlatExtractor {
    /// 创建新的独立题提取器
    ///
    /// 模式顺序是行为契约的一部分，不可调整。
    pub fn new() -> Self {
        Self {
            patterns: vec![
                // 1. 以问号结尾的编号列表项
                Regex::new(r"(?m)^\s*\d+\s*[.)、．]\s*(.*[?？])\s*$").unwrap(),
                // 2. 显式标注行
                Regex::new(r"(?mi)^\s*(?:question|問題|问题)\s*[:：]\s*(.+)$").unwrap(),
                // 3. 以问号结尾的普通句子
                Regex::new(&format!(
                    r"([^\n?？]{{{},}}[?？])",
                    BARE_SENTENCE_MIN_CHARS
                ))
                .unwrap(),
                // 4. 括号编号列表项
                Regex::new(r"(?m)^\s*[（(]\d+[)）]\s*(.+)$").unwrap(),
            ],
            cleanup_re: Regex::new(
                r"^\s*(?:\d+\s*[.)、．]\s*|[（(]\s*\d+\s*[)）]\s*|(?i:question)\s*[:：]\s*|問題\s*[:：]\s*|问题\s*[:：]\s*)?",
            )
            .unwrap(),
        }
    }

    /// 提取所有独立题候选
    ///
    /// # 参数
    /// - `text`: 提取出的文档全文
    ///
    /// # 返回
    /// 固定顺序的候选池；清洗后长度不在 (5, 300) 区间的候选被丢弃
    pub fn extract(&self, text: &str) -> Vec<FlatCandidate> {
        let mut candidates = Vec::new();

        for pattern in &self.patterns {
            for cap in pattern.captures_iter(text) {
                let matched = match cap.get(1) {
                    Some(m) => m,
                    None => continue,
                };

                let stem = self.clean_stem(matched.as_str());
                if !self.is_valid_stem(&stem) {
                    continue;
                }

                candidates.push(FlatCandidate {
                    stem,
                    end_offset: matched.end(),
                });
            }
        }

        candidates
    }

    /// 清洗题干：剥离行首编号或标注前缀，去掉首尾空白
    fn clean_stem(&self, raw: &str) -> String {
        self.cleanup_re.replace(raw, "").trim().to_string()
    }

    /// 校验题干长度（字符数严格介于 5 与 300 之间）
    fn is_valid_stem(&self, stem: &str) -> bool {
        let len = stem.chars().count();
        len > STEM_MIN_CHARS && len < STEM_MAX_CHARS
    }
}

impl Default for FlatExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_question_items() {
        let extractor = FlatExtractor::new();
        let text = "1. What is the capital of France?\n2. Name the largest ocean?";

        let stems: Vec<String> = extractor
            .extract(text)
            .into_iter()
            .map(|c| c.stem)
            .collect();

        assert!(stems.contains(&"What is the capital of France?".to_string()));
        assert!(stems.contains(&"Name the largest ocean?".to_string()));
    }

    #[test]
    fn test_labeled_question_lines() {
        let extractor = FlatExtractor::new();
        let text = "Question: Describe the water cycle\n問題：請說明光合作用";

        let stems: Vec<String> = extractor
            .extract(text)
            .into_iter()
            .map(|c| c.stem)
            .collect();

        assert!(stems.contains(&"Describe the water cycle".to_string()));
        assert!(stems.contains(&"請說明光合作用".to_string()));
    }

    #[test]
    fn test_bare_sentence_requires_min_length() {
        let extractor = FlatExtractor::new();

        // 足够长的问句命中
        let found = extractor.extract("How does gravity affect falling objects?");
        assert_eq!(found.len(), 1);

        // 太短的问句不命中
        let found = extractor.extract("Why not?");
        assert!(found.is_empty());
    }

    #[test]
    fn test_parenthesized_numbered_items() {
        let extractor = FlatExtractor::new();
        let text = "（1）请解释什么是化学反应\n(2) Explain the law of conservation";

        let stems: Vec<String> = extractor
            .extract(text)
            .into_iter()
            .map(|c| c.stem)
            .collect();

        assert!(stems.contains(&"请解释什么是化学反应".to_string()));
        assert!(stems.contains(&"Explain the law of conservation".to_string()));
    }

    #[test]
    fn test_stem_length_bounds() {
        let extractor = FlatExtractor::new();

        // 清洗后恰好 5 个字符：不满足"严格大于 5"
        assert!(extractor.extract("Question: 12345").is_empty());
        // 6 个字符通过
        assert_eq!(extractor.extract("Question: 123456").len(), 1);

        // 超长题干被丢弃
        let long_stem = "词".repeat(300);
        let text = format!("Question: {}", long_stem);
        assert!(extractor.extract(&text).is_empty());
    }

    #[test]
    fn test_pool_order_is_pattern_major() {
        let extractor = FlatExtractor::new();
        // 标注行在文本中先出现，但编号问句模式排在前面
        let text = "Question: Describe erosion in detail\n1. What causes earthquakes anyway?";

        let stems: Vec<String> = extractor
            .extract(text)
            .into_iter()
            .map(|c| c.stem)
            .collect();

        let numbered = stems
            .iter()
            .position(|s| s == "What causes earthquakes anyway?")
            .unwrap();
        let labeled = stems
            .iter()
            .position(|s| s == "Describe erosion in detail")
            .unwrap();
        assert!(numbered < labeled);
    }

    #[test]
    fn test_end_offset_points_past_match() {
        let extractor = FlatExtractor::new();
        let text = "1. Where do rivers begin their journey?\na) Mountains";

        let candidate = extractor.extract(text).into_iter().next().unwrap();
        assert_eq!(&text[candidate.end_offset..candidate.end_offset + 1], "\n");
    }
}

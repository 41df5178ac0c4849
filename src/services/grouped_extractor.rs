//! 组合题提取器 - 能力层
//!
//! 识别"编号主题干 + 字母子题"的结构化形态：
//!
//! ```text
//! 3) 选出一种水果
//! a) 苹果
//! b) 香蕉
//! 4) 下一个主题...
//! ```
//!
//! 一个主题干的范围从其所在行延伸到下一个编号主题干（或文本末尾）；
//! 范围内按出现顺序收集所有 `字母) 文本` 子行。只有至少找到一个子题
//! 的主题干才会产出组合题草稿。

use crate::models::{QuestionDraft, SubQuestion};
use regex::Regex;

/// 组合题提取器
pub struct GroupedExtractor {
    main_re: Regex,
    sub_re: Regex,
}

impl GroupedExtractor {
    /// 创建新的组合题提取器
    pub fn new() -> Self {
        Self {
            main_re: Regex::new(r"(?m)^\s*\d+\)\s*(.+)$").unwrap(),
            sub_re: Regex::new(r"(?m)^\s*([a-hA-H])\)\s*(.+)$").unwrap(),
        }
    }

    /// 提取所有组合题
    ///
    /// # 参数
    /// - `text`: 提取出的文档全文
    ///
    /// # 返回
    /// 按出现顺序排列的组合题草稿；未找到结构化形态时为空
    pub fn extract(&self, text: &str) -> Vec<QuestionDraft> {
        // 先收集所有主题干的位置，才能确定每个主题干的覆盖范围
        let mains: Vec<(usize, usize, &str)> = self
            .main_re
            .captures_iter(text)
            .filter_map(|cap| {
                let whole = cap.get(0)?;
                let stem = cap.get(1)?;
                Some((whole.start(), whole.end(), stem.as_str()))
            })
            .collect();

        let mut drafts = Vec::new();

        for (idx, &(_, span_start, stem)) in mains.iter().enumerate() {
            let span_end = mains
                .get(idx + 1)
                .map(|&(next_start, _, _)| next_start)
                .unwrap_or(text.len());

            let span = &text[span_start..span_end];

            let sub_questions: Vec<SubQuestion> = self
                .sub_re
                .captures_iter(span)
                .filter_map(|cap| {
                    let letter = cap.get(1)?.as_str();
                    let sub_text = cap.get(2)?.as_str().trim();
                    Some(SubQuestion::new(letter, sub_text))
                })
                .collect();

            let stem = stem.trim();
            if sub_questions.is_empty() || stem.is_empty() {
                continue;
            }

            drafts.push(QuestionDraft::grouped(stem, sub_questions));
        }

        drafts
    }
}

impl Default for GroupedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

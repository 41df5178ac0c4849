//! 去重服务 - 能力层
//!
//! 对候选题干做词级 Jaccard 相似度比较，去掉近似重复的题目。
//! 先被接受的候选获胜；相似度超过阈值的后来者被丢弃。
//! 候选数量是十位数级别，O(n²) 的两两比较完全够用。

use crate::models::QuestionDraft;
use std::collections::HashSet;
use tracing::debug;

/// 判定为重复的相似度阈值（严格大于才算重复）
const SIMILARITY_THRESHOLD: f64 = 0.8;

/// 计算两段文本的词级 Jaccard 相似度
///
/// 分词方式：转小写后按空白切分，取词集合（去重）。
/// 相似度 = |交集| / |并集|；两边都没有词时视为 0。
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<String> = a.to_lowercase().split_whitespace().map(str::to_string).collect();
    let tokens_b: HashSet<String> = b.to_lowercase().split_whitespace().map(str::to_string).collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f64 / union as f64
}

/// 按提取顺序去重候选题目
///
/// # 参数
/// - `drafts`: 固定提取顺序的候选草稿
///
/// # 返回
/// 保持原顺序的去重结果；与任一已接受题干相似度超过 0.8 的候选被丢弃
pub fn dedup_drafts(drafts: Vec<QuestionDraft>) -> Vec<QuestionDraft> {
    let mut accepted: Vec<QuestionDraft> = Vec::new();

    for draft in drafts {
        let is_duplicate = accepted
            .iter()
            .any(|kept| jaccard_similarity(&kept.stem, &draft.stem) > SIMILARITY_THRESHOLD);

        if is_duplicate {
            debug!("丢弃重复候选: {}", draft.stem);
            continue;
        }

        accepted.push(draft);
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard_identical_texts() {
        assert_eq!(jaccard_similarity("what is gravity", "what is gravity"), 1.0);
        // 大小写不敏感
        assert_eq!(jaccard_similarity("What Is Gravity", "what is gravity"), 1.0);
    }

    #[test]
    fn test_jaccard_disjoint_texts() {
        assert_eq!(jaccard_similarity("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // 交集 3 / 并集 4
        let sim = jaccard_similarity("what is photosynthesis", "what is photosynthesis explained");
        assert!((sim - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_empty_inputs() {
        assert_eq!(jaccard_similarity("", ""), 0.0);
        assert_eq!(jaccard_similarity("word", ""), 0.0);
    }

    #[test]
    fn test_first_seen_wins() {
        let drafts = vec![
            QuestionDraft::short_answer("What is photosynthesis?"),
            QuestionDraft::short_answer("What is photosynthesis?"),
            QuestionDraft::short_answer("How do volcanoes erupt?"),
        ];

        let unique = dedup_drafts(drafts);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].stem, "What is photosynthesis?");
        assert_eq!(unique[1].stem, "How do volcanoes erupt?");
    }

    #[test]
    fn test_below_threshold_is_kept() {
        // 相似度 0.75，不超过 0.8，两条都保留
        let drafts = vec![
            QuestionDraft::short_answer("what is photosynthesis"),
            QuestionDraft::short_answer("what is photosynthesis explained"),
        ];

        assert_eq!(dedup_drafts(drafts).len(), 2);
    }

    #[test]
    fn test_dedup_is_deterministic() {
        let make = || {
            vec![
                QuestionDraft::short_answer("Why is the sky blue today?"),
                QuestionDraft::short_answer("Why is the sky blue today?"),
                QuestionDraft::short_answer("Where do rivers start?"),
            ]
        };

        let first: Vec<String> = dedup_drafts(make()).into_iter().map(|d| d.stem).collect();
        let second: Vec<String> = dedup_drafts(make()).into_iter().map(|d| d.stem).collect();
        assert_eq!(first, second);
    }
}

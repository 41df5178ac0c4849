//! 出题流程 - 流程层
//!
//! 核心职责：定义"一份文档"的完整出题流程
//!
//! 流程顺序：
//! 1. 内容守卫（元数据占位文本直接出空集）
//! 2. 组合题提取（命中则完全取代独立题提取）
//! 3. 独立题提取 → 选项探测
//! 4. 去重 → 按提取顺序分配编号
//! 5. 洗牌并截取请求数量

use rand::Rng;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{Question, QuestionDraft};
use crate::services::{
    dedup_drafts, is_metadata_placeholder, selector, FlatExtractor, GroupedExtractor,
    OptionDetector,
};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;

/// 出题流程
///
/// - 编排完整的出题流程
/// - 不持有任何跨调用状态，可在并发宿主中按请求创建
/// - 只依赖业务能力（services）
pub struct QuizFlow {
    grouped_extractor: GroupedExtractor,
    flat_extractor: FlatExtractor,
    option_detector: OptionDetector,
    verbose_logging: bool,
}

impl QuizFlow {
    /// 创建新的出题流程
    pub fn new(config: &Config) -> Self {
        Self {
            grouped_extractor: GroupedExtractor::new(),
            flat_extractor: FlatExtractor::new(),
            option_detector: OptionDetector::new(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 对一份文档执行完整出题流程
    ///
    /// # 参数
    /// - `text`: 提取出的文档全文
    /// - `count`: 请求的题目数量
    /// - `ctx`: 文档上下文（仅用于日志）
    /// - `rng`: 注入的随机源
    ///
    /// # 返回
    /// 随机排列的前 min(count, 去重后数量) 个题目；守卫拦截或一无所获时为空
    pub fn run<R: Rng>(
        &self,
        text: &str,
        count: usize,
        ctx: &DocumentCtx,
        rng: &mut R,
    ) -> Vec<Question> {
        let unique_questions = self.extract_questions(text, ctx);

        if unique_questions.is_empty() {
            return Vec::new();
        }

        let selected = selector::select(unique_questions, count, rng);
        info!(
            "{} ✓ 出题完成: 返回 {} 道题目 (请求 {} 道)",
            ctx,
            selected.len(),
            count
        );

        selected
    }

    /// 提取并去重，返回按提取顺序编号的题目序列
    ///
    /// 这是流程中确定性的部分：相同输入永远得到相同的题目集和编号顺序，
    /// 只有 [`QuizFlow::run`] 末尾的洗牌引入随机性。
    pub fn extract_questions(&self, text: &str, ctx: &DocumentCtx) -> Vec<Question> {
        if text.trim().is_empty() {
            info!("{} 文本为空，无题可出", ctx);
            return Vec::new();
        }

        // ========== 流程 1: 内容守卫 ==========
        if is_metadata_placeholder(text) {
            warn!("{} ⚠️ 检测到文件元数据占位文本，跳过出题", ctx);
            return Vec::new();
        }

        // ========== 流程 2: 组合题优先 ==========
        let grouped = self.grouped_extractor.extract(text);

        let drafts = if !grouped.is_empty() {
            info!("{} ✓ 找到 {} 个组合题结构，跳过独立题提取", ctx, grouped.len());
            grouped
        } else {
            // ========== 流程 3: 独立题 + 选项探测 ==========
            self.extract_flat_drafts(text, ctx)
        };

        if drafts.is_empty() {
            info!("{} 未找到任何题目候选", ctx);
            return Vec::new();
        }

        // ========== 流程 4: 去重 + 编号 ==========
        let candidate_count = drafts.len();
        let unique = dedup_drafts(drafts);
        info!(
            "{} ✓ 去重完成: {} 个候选 → {} 道题目",
            ctx,
            candidate_count,
            unique.len()
        );

        if self.verbose_logging {
            self.log_stems(ctx, &unique);
        }

        unique
            .into_iter()
            .zip(1u32..)
            .map(|(draft, id)| draft.into_question(id))
            .collect()
    }

    /// 提取独立题候选并为每个候选探测选项
    fn extract_flat_drafts(&self, text: &str, ctx: &DocumentCtx) -> Vec<QuestionDraft> {
        let candidates = self.flat_extractor.extract(text);
        info!("{} 🔍 独立题模式命中 {} 个候选", ctx, candidates.len());

        candidates
            .into_iter()
            .map(|candidate| {
                let options = self.option_detector.detect(text, candidate.end_offset);
                if options.is_empty() {
                    QuestionDraft::short_answer(candidate.stem)
                } else {
                    QuestionDraft::multiple_choice(candidate.stem, options)
                }
            })
            .collect()
    }

    // ========== 日志辅助方法 ==========

    /// 显示去重后的题干预览
    fn log_stems(&self, ctx: &DocumentCtx, drafts: &[QuestionDraft]) {
        for (i, draft) in drafts.iter().enumerate() {
            info!("{}   {}. {}", ctx, i + 1, truncate_text(&draft.stem, 80));
        }
    }
}

/// 便捷入口：用默认配置和系统随机源对一段文本出题
///
/// 供宿主（如 Web 层）按请求直接调用；每次调用完全独立。
pub fn generate_questions(text: &str, count: usize) -> Vec<Question> {
    let config = Config::default();
    let flow = QuizFlow::new(&config);
    let ctx = DocumentCtx::new("inline", 1);
    flow.run(text, count, &ctx, &mut rand::thread_rng())
}

//! 单个文档处理器 - 编排层
//!
//! 负责一份文档的完整处理：出题、序列化、写出 JSON 文件

use crate::config::Config;
use crate::error::AppError;
use crate::models::ExtractedDocument;
use crate::utils::logging::truncate_text;
use crate::workflow::{DocumentCtx, QuizFlow};
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 处理单份文档
///
/// # 参数
/// - `flow`: 出题流程（由编排层创建并复用）
/// - `document`: 已提取为纯文本的文档
/// - `doc_index`: 文档索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回生成的题目数量；0 表示该文档无题可出（不是错误）
pub fn process_document(
    flow: &QuizFlow,
    document: &ExtractedDocument,
    doc_index: usize,
    config: &Config,
) -> Result<usize> {
    let ctx = DocumentCtx::new(&document.name, doc_index);

    info!("{} 开始处理", ctx);
    info!("{} 内容预览: {}", ctx, truncate_text(document.content.trim(), 80));

    let questions = flow.run(
        &document.content,
        config.question_count,
        &ctx,
        &mut rand::thread_rng(),
    );

    if questions.is_empty() {
        warn!("{} ⚠️ 未能从该文档生成任何题目", ctx);
        return Ok(0);
    }

    // 写出 JSON 文件
    let output_path =
        Path::new(&config.output_folder).join(format!("{}.questions.json", document.name));

    let json = serde_json::to_string_pretty(&questions).map_err(AppError::Serialize)?;
    fs::write(&output_path, json).map_err(|source| AppError::OutputWrite {
        path: output_path.display().to_string(),
        source,
    })?;

    info!(
        "{} ✓ 已写出 {} 道题目: {}",
        ctx,
        questions.len(),
        output_path.display()
    );

    Ok(questions.len())
}

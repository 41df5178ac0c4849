//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的处理和统计。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、准备输出目录、创建 QuizFlow
//! 2. **批量加载**：扫描并加载所有待处理的文本文件（`Vec<ExtractedDocument>`）
//! 3. **顺序处理**：引擎是对小字符串的纯 CPU 计算，逐个处理即可
//! 4. **全局统计**：汇总所有文档的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文档的细节，向下委托 document_processor
//! - **容错**：单个文档失败只计入统计，不中断整批

use crate::config::Config;
use crate::models::{load_all_text_files, ExtractedDocument};
use crate::orchestrator::document_processor;
use crate::utils::logging::init_log_file;
use crate::workflow::QuizFlow;
use anyhow::{Context, Result};
use std::fs;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuizFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 准备输出目录
        fs::create_dir_all(&config.output_folder)
            .with_context(|| format!("无法创建输出目录: {}", config.output_folder))?;

        let flow = QuizFlow::new(&config);

        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> Result<()> {
        // 加载所有待处理的文档
        let documents = self.load_documents()?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待处理的文本文件，程序结束");
            return Ok(());
        }

        log_documents_loaded(documents.len());

        // 处理所有文档
        let stats = self.process_all_documents(&documents);

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 加载文档
    fn load_documents(&self) -> Result<Vec<ExtractedDocument>> {
        info!("\n📁 正在扫描待处理的文本文件...");
        load_all_text_files(&self.config.text_folder)
    }

    /// 逐个处理文档并汇总统计
    fn process_all_documents(&self, documents: &[ExtractedDocument]) -> ProcessingStats {
        let mut stats = ProcessingStats {
            total: documents.len(),
            ..Default::default()
        };

        for (idx, document) in documents.iter().enumerate() {
            let doc_index = idx + 1;

            match document_processor::process_document(&self.flow, document, doc_index, &self.config)
            {
                Ok(0) => {
                    stats.empty += 1;
                }
                Ok(question_count) => {
                    stats.processed += 1;
                    stats.questions += question_count;
                }
                Err(e) => {
                    error!("[文件 {} #{}] ❌ 处理过程中发生错误: {}", document.name, doc_index, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    /// 成功出题的文档数
    processed: usize,
    /// 无题可出的文档数
    empty: usize,
    /// 处理失败的文档数
    failed: usize,
    /// 生成的题目总数
    questions: usize,
    /// 文档总数
    total: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量文档出题模式");
    info!("📊 每份文档请求题目数: {}", config.question_count);
    info!("{}", "=".repeat(60));
}

fn log_documents_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的文本文件\n", total);
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功出题: {}/{}", stats.processed, stats.total);
    info!("📝 生成题目总数: {}", stats.questions);
    info!("⚪ 无题可出: {}", stats.empty);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}

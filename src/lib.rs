//! # Quiz Generator
//!
//! 从已提取的教材文本中启发式抽取考题并随机出卷的引擎
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力独立、无状态
//! - `content_guard` - 拦截文件元数据占位文本
//! - `grouped_extractor` - 提取"编号主题干 + 字母子题"结构
//! - `flat_extractor` - 多模式提取独立问句
//! - `option_detector` - 题干后窗口内探测字母选项（恰好 4 个）
//! - `dedup_service` - 词级 Jaccard 相似度去重
//! - `selector` - Fisher–Yates 洗牌并截取
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的完整出题流程
//! - `DocumentCtx` - 上下文封装（文件名 + 索引，仅用于日志）
//! - `QuizFlow` - 流程编排（守卫 → 组合题优先 → 独立题 → 去重 → 选取）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，汇总统计
//! - `orchestrator/document_processor` - 单个文档处理器，写出 JSON
//!
//! ## 引擎契约
//!
//! 引擎是纯函数式的：输入一段文本和请求数量，输出一批 [`Question`]；
//! 无 I/O、无跨调用状态，任意多个调用可以并行执行。找不到题目不是
//! 错误，对应空结果。

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ExtractedDocument, Question, QuestionDraft, QuestionType, SubQuestion};
pub use orchestrator::App;
pub use workflow::{generate_questions, DocumentCtx, QuizFlow};

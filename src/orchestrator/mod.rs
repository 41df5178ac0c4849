//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载文本文件（Vec<ExtractedDocument>）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 对一份文档运行出题流程
//! - 序列化并写出 JSON 结果
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<ExtractedDocument>)
//!     ↓
//! document_processor (处理单个 ExtractedDocument)
//!     ↓
//! workflow::QuizFlow (一份文本 → 一批 Question)
//!     ↓
//! services (能力层：guard / extract / options / dedup / select)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use document_processor::process_document;

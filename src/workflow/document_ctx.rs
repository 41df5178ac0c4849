//! 文档处理上下文
//!
//! 封装"我正在处理哪份文件"这一信息，仅用于日志显示

use std::fmt::Display;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文件名（不含扩展名）
    pub doc_name: String,

    /// 文件在本批次中的索引（仅用于日志显示）
    pub doc_index: usize,
}

impl DocumentCtx {
    /// 创建新的文档上下文
    pub fn new(doc_name: impl Into<String>, doc_index: usize) -> Self {
        Self {
            doc_name: doc_name.into(),
            doc_index,
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 {} #{}]", self.doc_name, self.doc_index)
    }
}

use std::path::PathBuf;

/// 一份已提取为纯文本的教材文件
///
/// 二进制文件（PDF/DOCX）的解码由外部提取服务完成，本系统只消费其产出的
/// 纯文本。提取失败的文件会退化为描述性的元数据文本，由内容守卫负责拦截。
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// 文件名（不含扩展名），用于日志与输出文件命名
    pub name: String,
    /// 提取出的纯文本内容
    pub content: String,
    /// 源文件路径
    pub file_path: PathBuf,
}

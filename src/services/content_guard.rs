//! 内容守卫 - 能力层
//!
//! 上传的二进制文件提取失败时，上游会退化为"檔案名稱：xxx / 檔案類型：yyy"
//! 这类元数据占位文本。这类文本不是教材内容，必须在进入提取流程前拦截，
//! 否则会被误判为考题来源。

/// 元数据占位文本的标记（繁体标签来自上游提取服务的退化输出）
const METADATA_MARKERS: [&str; 2] = ["檔案名稱", "檔案類型"];

/// 英文环境下的等价标记（忽略大小写）
const METADATA_MARKERS_EN: [&str; 2] = ["file name:", "file type:"];

/// 判断文本是否为文件元数据占位符
///
/// # 参数
/// - `text`: 提取出的原始文本
///
/// # 返回
/// 命中任一标记即返回 true，整次生成调用应直接返回空题目集
pub fn is_metadata_placeholder(text: &str) -> bool {
    if METADATA_MARKERS.iter().any(|marker| text.contains(marker)) {
        return true;
    }

    let lowered = text.to_lowercase();
    METADATA_MARKERS_EN
        .iter()
        .any(|marker| lowered.contains(marker))
}

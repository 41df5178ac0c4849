use crate::models::document::ExtractedDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 从文本文件加载数据并转换为 ExtractedDocument 对象
///
/// 文件内容应为外部文本提取服务产出的纯文本。
pub fn load_text_document(text_file_path: &Path) -> Result<ExtractedDocument> {
    let content = fs::read_to_string(text_file_path)
        .with_context(|| format!("无法读取文本文件: {}", text_file_path.display()))?;

    let name = text_file_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ExtractedDocument {
        name,
        content,
        file_path: text_file_path.to_path_buf(),
    })
}

/// 从文件夹中加载所有文本文件并转换为 ExtractedDocument 对象列表
///
/// 单个文件加载失败只记录警告并跳过，不会中断整批加载。
pub fn load_all_text_files(folder_path: &str) -> Result<Vec<ExtractedDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut documents = Vec::new();
    let entries =
        fs::read_dir(&folder).with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();

    // 按文件名排序，保证批处理顺序稳定
    paths.sort();

    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_text_document(&path) {
            Ok(document) => {
                tracing::info!("成功加载 {} 个字符", document.content.chars().count());
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}

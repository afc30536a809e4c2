// search-core/src/indexer.rs
//! 索引模块 - 纯文本文件批量索引

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tantivy::{Index, IndexWriter, ReloadPolicy, doc};

use crate::models::TextDoc;
use crate::schema::{SchemaFields, build_schema};

/// IndexWriter 堆内存上限（字节）
const WRITER_MEMORY: usize = 50_000_000;

/// 一次批量索引的统计结果
#[derive(Debug, Clone, Copy)]
pub struct IndexStats {
    /// 成功写入索引的文件数
    pub indexed: usize,
    /// 读取失败被跳过的文件数
    pub skipped: usize,
    pub elapsed: Duration,
}

/// 初始化持久化索引（索引目录不存在时创建）
pub fn init_index(index_path: &Path) -> Result<Index> {
    let schema = build_schema();

    if !index_path.exists() {
        fs::create_dir_all(index_path)
            .with_context(|| format!("创建索引目录失败: {}", index_path.display()))?;
    }

    let index = Index::open_or_create(
        tantivy::directory::MmapDirectory::open(index_path)?,
        schema,
    )?;

    Ok(index)
}

/// 以只读会话方式打开已有索引
pub fn open_index(index_path: &Path) -> Result<(Index, tantivy::IndexReader)> {
    let index = Index::open_in_dir(index_path)
        .with_context(|| format!("打开索引失败: {}（请先执行索引操作）", index_path.display()))?;

    let reader = index
        .reader_builder()
        .reload_policy(ReloadPolicy::OnCommitWithDelay)
        .try_into()?;

    Ok((index, reader))
}

/// 批量索引目录下的 .txt 文件
///
/// 只遍历 `text_path` 的直接子项（不递归），扩展名 txt 不区分大小写。
/// 单个文件读取失败只记录警告并跳过，批次继续；目录枚举失败和
/// 写入/提交失败对本次索引是致命的。每次批量索引都会替换旧索引内容。
pub fn index_directory(index: &Index, text_path: &Path) -> Result<IndexStats> {
    let schema = index.schema();
    let fields = SchemaFields::from_schema(&schema);

    let mut writer: IndexWriter = index.writer(WRITER_MEMORY)?;

    // 重建语义：先清空旧文档，再写入本次批量
    writer.delete_all_documents()?;

    let started = Instant::now();
    let mut indexed = 0usize;
    let mut skipped = 0usize;

    let entries = fs::read_dir(text_path)
        .with_context(|| format!("读取文档目录失败: {}", text_path.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_text_file(&path) {
            continue;
        }

        match read_text_doc(&path) {
            Ok(doc_data) => {
                writer.add_document(doc!(
                    fields.name => doc_data.name.as_str(),
                    fields.content => doc_data.content.as_str(),
                ))?;
                indexed += 1;
                tracing::info!("已索引: {}", doc_data.name);
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!("读取文件失败，跳过 {}: {:#}", path.display(), e);
            }
        }
    }

    writer.commit()?;

    let stats = IndexStats {
        indexed,
        skipped,
        elapsed: started.elapsed(),
    };
    tracing::info!(
        "索引完成: {} 个文件（跳过 {} 个），耗时 {} ms",
        stats.indexed,
        stats.skipped,
        stats.elapsed.as_millis()
    );
    Ok(stats)
}

/// 读取单个文本文件为待索引文档（UTF-8）
pub fn read_text_doc(path: &Path) -> Result<TextDoc> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .context("文件路径缺少文件名")?;
    let content = fs::read_to_string(path)?;
    Ok(TextDoc::new(name, content))
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &Path, name: &str, bytes: &[u8]) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(bytes).unwrap();
    }

    fn doc_count(index: &Index) -> u64 {
        let reader = index.reader().unwrap();
        reader.reload().unwrap();
        reader.searcher().num_docs()
    }

    #[test]
    fn test_indexes_only_txt_files_in_top_level() {
        let text_dir = tempfile::tempdir().unwrap();
        let index_dir = tempfile::tempdir().unwrap();

        write_file(text_dir.path(), "a.txt", b"hello world");
        write_file(text_dir.path(), "b.TXT", b"uppercase extension");
        write_file(text_dir.path(), "notes.md", b"not a txt file");
        // 子目录不递归
        fs::create_dir(text_dir.path().join("sub")).unwrap();
        write_file(&text_dir.path().join("sub"), "c.txt", b"nested");

        let index = init_index(index_dir.path()).unwrap();
        let stats = index_directory(&index, text_dir.path()).unwrap();

        assert_eq!(stats.indexed, 2);
        assert_eq!(stats.skipped, 0);
        assert_eq!(doc_count(&index), 2);
    }

    #[test]
    fn test_unreadable_file_is_skipped_not_fatal() {
        let text_dir = tempfile::tempdir().unwrap();
        let index_dir = tempfile::tempdir().unwrap();

        write_file(text_dir.path(), "good.txt", b"readable");
        // 非法 UTF-8，读取失败
        write_file(text_dir.path(), "bad.txt", &[0xff, 0xfe, 0x80]);

        let index = init_index(index_dir.path()).unwrap();
        let stats = index_directory(&index, text_dir.path()).unwrap();

        assert_eq!(stats.indexed, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(doc_count(&index), 1);
    }

    #[test]
    fn test_reindex_replaces_previous_batch() {
        let text_dir = tempfile::tempdir().unwrap();
        let index_dir = tempfile::tempdir().unwrap();

        write_file(text_dir.path(), "a.txt", b"first run");

        let index = init_index(index_dir.path()).unwrap();
        index_directory(&index, text_dir.path()).unwrap();
        // 第二次批量不是追加，而是替换
        index_directory(&index, text_dir.path()).unwrap();

        assert_eq!(doc_count(&index), 1);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let index_dir = tempfile::tempdir().unwrap();
        let index = init_index(index_dir.path()).unwrap();

        let result = index_directory(&index, Path::new("/nonexistent/text/dir"));
        assert!(result.is_err());
    }

    #[test]
    fn test_open_index_requires_existing_index() {
        let empty = tempfile::tempdir().unwrap();
        assert!(open_index(&empty.path().join("missing")).is_err());
    }
}

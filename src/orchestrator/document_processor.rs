//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责单份 PDF 从磁盘到报告文件的全过程。
//!
//! ## 核心功能
//!
//! 1. **读取文件**：把 PDF 字节读进内存
//! 2. **流程调度**：调用 `ParseFlow` 执行解析
//! 3. **报告落盘**：把 `ParseReport` 序列化成 JSON 写进报告目录
//! 4. **统计输出**：记录题目总数、答案覆盖情况、缺失题号

use crate::config::Config;
use crate::infrastructure::PdfTextExtractor;
use crate::models::ParseReport;
use crate::utils::logging::truncate_text;
use crate::workflow::ParseFlow;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// 处理单份 PDF 文档
///
/// # 参数
/// - `extractor`: PDF 文本提取器（持有 pdfium 绑定）
/// - `flow`: 解析流程
/// - `pdf_path`: PDF 文件路径
/// - `paper_index`: 试卷索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回解析报告
pub async fn process_document(
    extractor: &PdfTextExtractor,
    flow: &ParseFlow,
    pdf_path: &Path,
    paper_index: usize,
    config: &Config,
) -> Result<ParseReport> {
    log_document_start(paper_index, pdf_path);

    let pdf_bytes = fs::read(pdf_path)
        .await
        .with_context(|| format!("无法读取PDF文件: {}", pdf_path.display()))?;

    // 解析是同步纯函数，同一份字节重复解析结果完全一致
    let report = flow.parse(extractor, &pdf_bytes)?;

    log_report(paper_index, &report, config.verbose_logging);

    let report_path = write_report(&report, pdf_path, &config.report_folder).await?;
    info!("[试卷 {}] ✓ 报告已写入: {}", paper_index, report_path.display());

    Ok(report)
}

/// 把报告序列化成 JSON 写进报告目录
async fn write_report(
    report: &ParseReport,
    pdf_path: &Path,
    report_folder: &str,
) -> Result<PathBuf> {
    let stem = pdf_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let report_path = Path::new(report_folder).join(format!("{}.json", stem));

    let json = serde_json::to_string_pretty(report)?;
    fs::write(&report_path, json)
        .await
        .with_context(|| format!("无法写入报告: {}", report_path.display()))?;

    Ok(report_path)
}

// ========== 日志辅助函数 ==========

fn log_document_start(paper_index: usize, pdf_path: &Path) {
    info!("\n[试卷 {}] {}", paper_index, "─".repeat(30));
    info!(
        "[试卷 {}] 开始处理: {}",
        paper_index,
        pdf_path.file_name().unwrap_or_default().to_string_lossy()
    );
}

fn log_report(paper_index: usize, report: &ParseReport, verbose: bool) {
    info!(
        "[试卷 {}] 题目统计: 总计 {}, 有答案 {}, 无答案 {}",
        paper_index,
        report.total_questions,
        report.questions_with_answers,
        report.questions_without_answers
    );

    if !report.missing_numbers.is_empty() {
        warn!(
            "[试卷 {}] ⚠️ 缺失题号: {:?}",
            paper_index, report.missing_numbers
        );
    }

    // 详细日志（如果启用）
    if verbose {
        for question in report.questions.iter().take(2) {
            info!(
                "[试卷 {}]   {}. {} [答案: {}]",
                paper_index,
                question.number,
                truncate_text(&question.question, 80),
                question.correct_answer
            );
        }
    }
}

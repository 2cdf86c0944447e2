//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量 PDF 的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、绑定 pdfium、创建 ParseFlow
//! 2. **批量加载**：扫描待处理目录里的所有 PDF 文件
//! 3. **顺序处理**：pdfium 引擎整个进程只绑定一次，文档逐份处理
//! 4. **资源管理**：持有 PdfTextExtractor，确保生命周期正确
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文档的细节，向下委托 document_processor
//! - **资源所有者**：唯一持有 PdfTextExtractor 的模块
//! - **失败隔离**：单份文档解析失败只记日志计数，不中断整批

use crate::config::Config;
use crate::infrastructure::PdfTextExtractor;
use crate::orchestrator::document_processor;
use crate::workflow::ParseFlow;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    extractor: PdfTextExtractor,
    flow: ParseFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 绑定 pdfium 动态库（整个进程只做一次）
        let extractor = PdfTextExtractor::new()?;

        // 创建解析流程（编译过滤规则）
        let flow = ParseFlow::new(&config)?;

        Ok(Self {
            config,
            extractor,
            flow,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待处理的 PDF
        let pdf_files = self.load_pdf_files().await?;

        if pdf_files.is_empty() {
            warn!("⚠️ 没有找到待处理的PDF文件，程序结束");
            return Ok(());
        }

        let total = pdf_files.len();
        log_documents_loaded(total);

        tokio::fs::create_dir_all(&self.config.report_folder)
            .await
            .with_context(|| format!("无法创建报告目录: {}", self.config.report_folder))?;

        // 处理所有文档
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (idx, pdf_path) in pdf_files.iter().enumerate() {
            let paper_index = idx + 1;
            match document_processor::process_document(
                &self.extractor,
                &self.flow,
                pdf_path,
                paper_index,
                &self.config,
            )
            .await
            {
                Ok(_) => stats.success += 1,
                Err(e) => {
                    error!("[试卷 {}] ❌ 处理过程中发生错误: {}", paper_index, e);
                    stats.failed += 1;
                }
            }
        }

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 扫描待处理目录里的 PDF 文件
    async fn load_pdf_files(&self) -> Result<Vec<PathBuf>> {
        info!("\n📁 正在扫描待处理的试卷...");

        let folder = PathBuf::from(&self.config.pdf_folder);
        if !folder.exists() {
            anyhow::bail!("文件夹不存在: {}", self.config.pdf_folder);
        }

        let mut pdf_files = Vec::new();
        let mut entries = tokio::fs::read_dir(&folder)
            .await
            .with_context(|| format!("无法读取文件夹: {}", self.config.pdf_folder))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("pdf") {
                pdf_files.push(path);
            }
        }

        // 按文件名排序，保证处理顺序稳定
        pdf_files.sort();

        Ok(pdf_files)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

// ========== 日志辅助函数 ==========

fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n试卷解析日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷解析模式");
    info!("📁 待处理目录: {}", config.pdf_folder);
    info!("📁 报告目录: {}", config.report_folder);
    info!("{}", "=".repeat(60));
}

fn log_documents_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的试卷", total);
    info!("💡 文档将按文件名顺序逐份处理\n");
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}

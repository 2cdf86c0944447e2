//! PDF 文本提取器 - 基础设施层
//!
//! 持有唯一的 pdfium 绑定，只暴露"按左右栏提取文本"的能力

use crate::error::{ExtractError, ExtractResult};
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::debug;

/// PDF 文本提取器
///
/// 职责：
/// - 持有唯一的 Pdfium 绑定
/// - 暴露 extract_column_blocks() 能力
/// - 不认识 Question / Report
/// - 不处理业务流程
pub struct PdfTextExtractor {
    pdfium: Pdfium,
}

impl PdfTextExtractor {
    /// 绑定 pdfium 动态库并创建提取器
    ///
    /// 绑定顺序：PDFIUM_DYNAMIC_LIB_PATH 环境变量 → 当前目录 → 系统库
    pub fn new() -> ExtractResult<Self> {
        let bindings = Self::bind_pdfium()?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    fn bind_pdfium() -> ExtractResult<Box<dyn PdfiumLibraryBindings>> {
        if let Ok(dir) = std::env::var("PDFIUM_DYNAMIC_LIB_PATH") {
            let lib_path = Pdfium::pdfium_platform_library_name_at_path(&PathBuf::from(dir));
            if let Ok(bindings) = Pdfium::bind_to_library(&lib_path) {
                return Ok(bindings);
            }
        }

        let local_path = Pdfium::pdfium_platform_library_name_at_path(&PathBuf::from("./"));
        Pdfium::bind_to_library(&local_path)
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| ExtractError::Other(format!("无法绑定 pdfium 动态库: {}", e)))
    }

    /// 逐页按左右两栏提取文本
    ///
    /// # 参数
    /// - `pdf_bytes`: PDF 文件内容
    ///
    /// # 返回
    /// 返回按列主序排列的栏文本块（第 1 页左栏、第 1 页右栏、第 2 页左栏……），
    /// 没有文本的栏不产生块。文档句柄在本函数返回前释放
    pub fn extract_column_blocks(&self, pdf_bytes: &[u8]) -> ExtractResult<Vec<String>> {
        let document = self.pdfium.load_pdf_from_byte_slice(pdf_bytes, None)?;

        let mut blocks = Vec::new();
        for page in document.pages().iter() {
            let width = page.width();
            let height = page.height();
            let mid = PdfPoints::new(width.value / 2.0);

            let text = page.text()?;

            let left = PdfRect::new(PdfPoints::ZERO, PdfPoints::ZERO, height, mid);
            let right = PdfRect::new(PdfPoints::ZERO, mid, height, width);

            for rect in [left, right] {
                let column_text = text.inside_rect(rect);
                if !column_text.is_empty() {
                    blocks.push(column_text);
                }
            }
        }

        debug!("共提取 {} 个栏文本块", blocks.len());
        Ok(blocks)
    }
}

//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 扫描待处理目录（Vec<PathBuf>）
//! - 管理 pdfium 资源（PdfTextExtractor）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 读取单份 PDF 的字节
//! - 调用 ParseFlow 解析
//! - 把报告写成 JSON 文件
//! - 输出单份文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! document_processor (处理单份 PDF)
//!     ↓
//! workflow::ParseFlow (字节 → ParseReport)
//!     ↓
//! services (能力层：filter / answer_key / segmenter)
//!     ↓
//! infrastructure (基础设施：PdfTextExtractor)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，document_processor 管单个
//! 2. **资源隔离**：只有编排层持有 PdfTextExtractor
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **无业务逻辑**：只做调度和统计，不做具体解析判断

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use document_processor::process_document;

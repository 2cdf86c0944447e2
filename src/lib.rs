//! # Exam Question Extract
//!
//! 从双栏排版的试卷 PDF 中提取选择题结构化记录的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（pdfium 绑定），只暴露能力
//! - `PdfTextExtractor` - 唯一的 pdfium owner，提供按左右栏提取文本的能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个输入
//! - `BoilerplateFilter` - 按规则丢弃页眉/水印噪声行
//! - `AnswerKeyParser` - 切分答案区、三轮提取 题号 → 字母 映射
//! - `QuestionSegmenter` - 切出单个题块、拆出 A-D 选项
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的完整解析流程
//! - `ParseFlow` - 流程编排（栏切分 → 过滤 → 拼接 → 答案 → 切题 → 汇总）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理资源和统计
//! - `orchestrator/document_processor` - 单个文档处理器，读文件、写报告
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ExtractError, ExtractResult};
pub use infrastructure::PdfTextExtractor;
pub use models::{AnswerMap, ParseReport, Question};
pub use orchestrator::{process_document, App};
pub use workflow::ParseFlow;

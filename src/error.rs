use pdfium_render::prelude::PdfiumError;
use std::fmt;

/// 提取管线错误类型
#[derive(Debug)]
pub enum ExtractError {
    /// 字节缓冲不是可读的 PDF 文档（或引擎在提取途中失败）
    MalformedDocument {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 正则规则编译失败
    ///
    /// 内置模式都是固定字面量，这个分支只会由配置文件里的自定义过滤规则触发
    Pattern {
        pattern: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MalformedDocument { source } => {
                write!(f, "文档无法解析: {}", source)
            }
            ExtractError::Pattern { pattern, source } => {
                write!(f, "正则规则编译失败 ({}): {}", pattern, source)
            }
            ExtractError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::MalformedDocument { source } | ExtractError::Pattern { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ExtractError::Other(_) => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<ExtractError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<PdfiumError> for ExtractError {
    fn from(err: PdfiumError) -> Self {
        ExtractError::MalformedDocument {
            source: Box::new(err),
        }
    }
}

// ========== 便捷构造函数 ==========

impl ExtractError {
    /// 创建文档解析错误
    pub fn malformed_document(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        ExtractError::MalformedDocument {
            source: Box::new(source),
        }
    }

    /// 创建正则规则错误
    pub fn pattern(
        pattern: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ExtractError::Pattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 提取管线结果类型
pub type ExtractResult<T> = Result<T, ExtractError>;

//! 文本清洗工具
//!
//! 只作用于切出来的题干/选项片段，不作用于整篇文本

/// 清洗提取出来的文本片段
///
/// 把连续空白压成单个空格、修复 "–√" 乱码、去掉首尾空白
pub fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("–√", "√")
}

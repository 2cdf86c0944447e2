//! 版式噪声过滤 - 业务能力层
//!
//! 只负责"丢掉噪声行"这一件事，不关心栏和页的来历

use crate::error::{ExtractError, ExtractResult};
use regex::{Regex, RegexBuilder};

/// 默认过滤规则：页眉、横幅、水印行（按顺序应用，大小写不敏感）
pub const DEFAULT_FILTER_RULES: [&str; 5] = [
    r"Part\s+\d+\s+General Education",
    r"\d+\s+QUESTIONS\s+With\s+ANSWERS",
    r"This file was submitted to www\.teachpinas\.com",
    r"Get more Free LET Reviewers @ www\.teachpinas\.com",
    r"www\.teachpinas\.com",
];

/// 版式噪声过滤器
///
/// 职责：
/// - 持有一组有序的过滤规则
/// - 逐行匹配，命中任意规则的行直接丢弃
/// - 在拼接整篇文本之前按栏调用，避免噪声跨栏污染题目文本
pub struct BoilerplateFilter {
    rules: Vec<Regex>,
}

impl BoilerplateFilter {
    /// 用给定的规则列表创建过滤器
    ///
    /// # 参数
    /// - `rules`: 有序的正则规则，匹配时忽略大小写
    pub fn new(rules: &[String]) -> ExtractResult<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let re = RegexBuilder::new(rule)
                .case_insensitive(true)
                .build()
                .map_err(|e| ExtractError::pattern(rule, e))?;
            compiled.push(re);
        }
        Ok(Self { rules: compiled })
    }

    /// 过滤一个栏块的文本
    ///
    /// # 返回
    /// 返回去掉噪声行之后重新用换行拼接的文本
    pub fn filter(&self, text: &str) -> String {
        text.lines()
            .filter(|line| !self.rules.iter().any(|re| re.is_match(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_filter() -> BoilerplateFilter {
        let rules: Vec<String> = DEFAULT_FILTER_RULES.iter().map(|s| s.to_string()).collect();
        BoilerplateFilter::new(&rules).unwrap()
    }

    #[test]
    fn test_filter_drops_watermark_lines() {
        let filter = create_test_filter();
        let text = "1. What is 2+2?\nThis file was submitted to www.teachpinas.com\nA. 3";
        assert_eq!(filter.filter(text), "1. What is 2+2?\nA. 3");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filter = create_test_filter();
        let text = "GET MORE FREE LET REVIEWERS @ WWW.TEACHPINAS.COM\nkeep me";
        assert_eq!(filter.filter(text), "keep me");
    }

    #[test]
    fn test_filter_matches_header_banner() {
        let filter = create_test_filter();
        let text = "Part 1 General Education\n150 QUESTIONS With ANSWERS\n1. First";
        assert_eq!(filter.filter(text), "1. First");
    }

    #[test]
    fn test_filter_keeps_clean_text_unchanged() {
        let filter = create_test_filter();
        let text = "1. What is 2+2?\nA. 3\nB. 4";
        assert_eq!(filter.filter(text), text);
    }

    #[test]
    fn test_new_rejects_invalid_rule() {
        let rules = vec!["(unclosed".to_string()];
        assert!(BoilerplateFilter::new(&rules).is_err());
    }
}

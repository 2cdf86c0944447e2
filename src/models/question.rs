use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 题号 → 答案字母（A-D）的映射
///
/// 用 BTreeMap 保证按题号有序，取最大题号时直接看最后一个键
pub type AnswerMap = BTreeMap<u32, String>;

/// 单道选择题的结构化记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: u32,
    pub question: String,
    /// 固定 4 条，按 A、B、C、D 排列；未定位到的选项是 "<字母>. (Missing)"
    pub choices: Vec<String>,
    /// "A"–"D"，答案键里没有这道题时是 "N/A"
    pub correct_answer: String,
}

/// 单份文档的解析报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub total_questions: usize,
    pub questions_with_answers: usize,
    pub questions_without_answers: usize,
    /// 预期范围内没切出题块的题号，升序，最多 20 个
    pub missing_numbers: Vec<u32>,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_with_snake_case_fields() {
        let report = ParseReport {
            total_questions: 1,
            questions_with_answers: 1,
            questions_without_answers: 0,
            missing_numbers: vec![],
            questions: vec![Question {
                number: 1,
                question: "示例题干".to_string(),
                choices: vec![
                    "A. 甲".to_string(),
                    "B. 乙".to_string(),
                    "C. 丙".to_string(),
                    "D. (Missing)".to_string(),
                ],
                correct_answer: "B".to_string(),
            }],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("total_questions").is_some());
        assert!(value.get("questions_with_answers").is_some());
        assert!(value.get("questions_without_answers").is_some());
        assert!(value.get("missing_numbers").is_some());
        assert_eq!(value["questions"][0]["correct_answer"], "B");
    }
}

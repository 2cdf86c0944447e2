//! 答案键解析 - 业务能力层
//!
//! 负责两件事：按答案区标题切分全文，以及从答案区提取 题号 → 字母 映射

use crate::error::{ExtractError, ExtractResult};
use crate::models::AnswerMap;
use regex::{Regex, RegexBuilder};

/// 答案区标题，兼容单复数和内部空白（"Answer Key" / "AnswerKeys" …）
const ANSWER_KEY_HEADER: &str = r"answer\s*keys?";

/// 答案键完全解析不出来时的默认题号上限
///
/// 没有答案键的文档仍然按固定上限尝试切题，而不是直接输出空报告
pub const DEFAULT_MAX_QUESTION: u32 = 150;

/// 三轮提取模式，从宽到严依次应用
///
/// 第 1 轮先占位，后两轮只补缺口，不覆盖已有的题号
const ANSWER_PASSES: [&str; 3] = [
    r"(\d+)\.\s*([A-D])\b",
    r"(\d+)\s*\.\s*([A-D])\b",
    r"(\d+)\.([A-D])\b",
];

/// 答案键解析器
pub struct AnswerKeyParser;

impl AnswerKeyParser {
    /// 创建新的答案键解析器
    pub fn new() -> Self {
        Self
    }

    /// 按答案区标题切分全文
    ///
    /// # 参数
    /// - `text`: 拼接后的整篇文本
    ///
    /// # 返回
    /// 返回 (题目区, 答案区)。找到标题时题目区是标题之前的部分，
    /// 答案区从标题起直到结尾（含标题）；找不到标题时两者都是全文，
    /// 由答案提取在整篇文本上兜底扫描
    pub fn split_sections<'a>(&self, text: &'a str) -> ExtractResult<(&'a str, &'a str)> {
        let header = RegexBuilder::new(ANSWER_KEY_HEADER)
            .case_insensitive(true)
            .build()
            .map_err(|e| ExtractError::pattern(ANSWER_KEY_HEADER, e))?;

        match header.find(text) {
            Some(m) => Ok((&text[..m.start()], &text[m.start()..])),
            None => Ok((text, text)),
        }
    }

    /// 从答案区提取 题号 → 字母 映射
    ///
    /// 三轮模式按顺序全局匹配，统一"键不存在才插入"：
    /// 先跑的宽松模式对同一题号的结果优先于后跑的严格模式
    pub fn extract(&self, answer_region: &str) -> ExtractResult<AnswerMap> {
        let mut answers = AnswerMap::new();

        for pattern in ANSWER_PASSES {
            let re = Regex::new(pattern).map_err(|e| ExtractError::pattern(pattern, e))?;
            for caps in re.captures_iter(answer_region) {
                let Ok(number) = caps[1].parse::<u32>() else {
                    continue;
                };
                answers
                    .entry(number)
                    .or_insert_with(|| caps[2].to_string());
            }
        }

        Ok(answers)
    }

    /// 映射中的最大题号；映射为空时退回默认上限
    pub fn max_question_number(answers: &AnswerMap) -> u32 {
        answers
            .keys()
            .next_back()
            .copied()
            .unwrap_or(DEFAULT_MAX_QUESTION)
    }
}

impl Default for AnswerKeyParser {
    fn default() -> Self {
        Self::new()
    }
}

//! 题块切分与选项提取 - 业务能力层
//!
//! 只处理单个题号：在题目区里切出这道题的题块，再从题块里拆出四个选项。
//! 不出现 Vec<Question>，不关心报告怎么汇总

use crate::error::{ExtractError, ExtractResult};
use crate::utils::text::clean_text;
use regex::Regex;
use std::collections::HashMap;

/// 选项字母表，固定 A、B、C、D
pub const CHOICE_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// 清洗后不足 3 个字符的题干按噪声丢弃（防止光秃秃的编号被当成题目）
const MIN_QUESTION_LEN: usize = 3;

/// 切分出来的单个题块
#[derive(Debug)]
pub struct QuestionBlock {
    /// 清洗后的题干
    pub question_text: String,
    /// 已定位到的选项（字母 → 清洗后文本），缺的字母不在里面
    pub choices: HashMap<char, String>,
}

/// 题块切分器
pub struct QuestionSegmenter;

impl QuestionSegmenter {
    /// 创建新的题块切分器
    pub fn new() -> Self {
        Self
    }

    /// 在题目区中定位指定题号的题块并拆出选项
    ///
    /// # 参数
    /// - `questions_text`: 题目区文本
    /// - `number`: 题号
    ///
    /// # 返回
    /// 找不到题块、或题干清洗后过短时返回 None，其余返回题块
    pub fn extract_question(
        &self,
        questions_text: &str,
        number: u32,
    ) -> ExtractResult<Option<QuestionBlock>> {
        let Some(content) = self.locate_block(questions_text, number)? else {
            return Ok(None);
        };

        let mut choices = HashMap::new();
        for letter in CHOICE_LETTERS {
            if let Some(choice_text) = self.locate_choice(content, letter)? {
                choices.insert(letter, choice_text);
            }
        }

        // A 选项之前的部分是题干；没定位到 A 选项时整个题块都算题干
        let narrative = match content.find("A.") {
            Some(pos) if choices.contains_key(&'A') => &content[..pos],
            _ => content,
        };
        let question_text = clean_text(narrative);

        if question_text.chars().count() < MIN_QUESTION_LEN {
            return Ok(None);
        }

        Ok(Some(QuestionBlock {
            question_text,
            choices,
        }))
    }

    /// 定位题块正文
    ///
    /// 从第一个 "<n>." 之后开始，到下一题的 "\n<n+1>." 、字面量 "\nAnswer"
    /// 或文本结尾为止，跨行匹配
    fn locate_block<'a>(&self, text: &'a str, number: u32) -> ExtractResult<Option<&'a str>> {
        let start_pattern = format!(r"{}\.\s*", number);
        let start_re =
            Regex::new(&start_pattern).map_err(|e| ExtractError::pattern(&start_pattern, e))?;
        let Some(start) = start_re.find(text) else {
            return Ok(None);
        };
        let tail = &text[start.end()..];

        let next_pattern = format!(r"\n{}\.\s+", number + 1);
        let next_re =
            Regex::new(&next_pattern).map_err(|e| ExtractError::pattern(&next_pattern, e))?;

        let mut end = tail.len();
        if let Some(m) = next_re.find(tail) {
            end = end.min(m.start());
        }
        if let Some(pos) = tail.find("\nAnswer") {
            end = end.min(pos);
        }

        Ok(Some(&tail[..end]))
    }

    /// 在题块内定位某个选项的文本
    ///
    /// 从 "<letter>." 之后开始，到下一个选项标记、下一题编号或题块结尾为止
    fn locate_choice(&self, content: &str, letter: char) -> ExtractResult<Option<String>> {
        let start_pattern = format!(r"{}\.\s*", letter);
        let start_re =
            Regex::new(&start_pattern).map_err(|e| ExtractError::pattern(&start_pattern, e))?;
        let Some(start) = start_re.find(content) else {
            return Ok(None);
        };
        let tail = &content[start.end()..];

        let next_choice_re = Regex::new(r"\s+[A-D]\.\s+")
            .map_err(|e| ExtractError::pattern(r"\s+[A-D]\.\s+", e))?;
        let next_question_re =
            Regex::new(r"\n\d+\.\s+").map_err(|e| ExtractError::pattern(r"\n\d+\.\s+", e))?;

        let mut end = tail.len();
        if let Some(m) = next_choice_re.find(tail) {
            end = end.min(m.start());
        }
        if let Some(m) = next_question_re.find(tail) {
            end = end.min(m.start());
        }

        let choice_text = clean_text(&tail[..end]);
        if choice_text.is_empty() {
            return Ok(None);
        }
        Ok(Some(choice_text))
    }
}

impl Default for QuestionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_segmenter() -> QuestionSegmenter {
        QuestionSegmenter::new()
    }

    #[test]
    fn test_extract_question_with_four_choices() {
        let segmenter = create_test_segmenter();
        let text = "1. What is 2+2?\nA. 3\nB. 4\nC. 5\nD. 6\n2. Next question text";

        let block = segmenter.extract_question(text, 1).unwrap().unwrap();
        assert_eq!(block.question_text, "What is 2+2?");
        assert_eq!(block.choices.get(&'A').map(String::as_str), Some("3"));
        assert_eq!(block.choices.get(&'B').map(String::as_str), Some("4"));
        assert_eq!(block.choices.get(&'C').map(String::as_str), Some("5"));
        assert_eq!(block.choices.get(&'D').map(String::as_str), Some("6"));
    }

    #[test]
    fn test_extract_question_spanning_multiple_lines() {
        let segmenter = create_test_segmenter();
        let text = "3. Which of the following\nbest describes water?\nA. A solid\nB. A liquid\nC. A gas\nD. A plasma\n4. Next";

        let block = segmenter.extract_question(text, 3).unwrap().unwrap();
        assert_eq!(
            block.question_text,
            "Which of the following best describes water?"
        );
        assert_eq!(
            block.choices.get(&'B').map(String::as_str),
            Some("A liquid")
        );
    }

    #[test]
    fn test_extract_question_missing_choice() {
        let segmenter = create_test_segmenter();
        let text = "1. Pick one\nA. x\nB. y\nD. z";

        let block = segmenter.extract_question(text, 1).unwrap().unwrap();
        assert!(block.choices.contains_key(&'A'));
        assert!(block.choices.contains_key(&'B'));
        assert!(!block.choices.contains_key(&'C'));
        assert_eq!(block.choices.get(&'D').map(String::as_str), Some("z"));
    }

    #[test]
    fn test_extract_question_absent_number_returns_none() {
        let segmenter = create_test_segmenter();
        let text = "1. Only question\nA. x\nB. y\nC. z\nD. w";
        assert!(segmenter.extract_question(text, 42).unwrap().is_none());
    }

    #[test]
    fn test_extract_question_discards_short_block() {
        let segmenter = create_test_segmenter();
        // 3 号题只有两个字符的内容，按噪声丢弃
        let text = "3. ab\n4. A real question here\nA. x\nB. y\nC. z\nD. w";
        assert!(segmenter.extract_question(text, 3).unwrap().is_none());
        assert!(segmenter.extract_question(text, 4).unwrap().is_some());
    }

    #[test]
    fn test_block_stops_at_answer_line() {
        let segmenter = create_test_segmenter();
        let text = "5. Question five text\nAnswer: B is correct\n6. Question six text";

        let block = segmenter.extract_question(text, 5).unwrap().unwrap();
        assert_eq!(block.question_text, "Question five text");
    }

    #[test]
    fn test_block_without_choices_uses_whole_text_as_narrative() {
        let segmenter = create_test_segmenter();
        let text = "9. True or false: water boils at 100 degrees Celsius\n10. Next one";

        let block = segmenter.extract_question(text, 9).unwrap().unwrap();
        assert!(block.choices.is_empty());
        assert_eq!(
            block.question_text,
            "True or false: water boils at 100 degrees Celsius"
        );
    }

    #[test]
    fn test_choices_on_single_line() {
        let segmenter = create_test_segmenter();
        let text = "2. Pick the number\nA. one B. two C. three D. four\n3. Next";

        let block = segmenter.extract_question(text, 2).unwrap().unwrap();
        assert_eq!(block.choices.get(&'A').map(String::as_str), Some("one"));
        assert_eq!(block.choices.get(&'C').map(String::as_str), Some("three"));
        assert_eq!(block.choices.get(&'D').map(String::as_str), Some("four"));
    }

    #[test]
    fn test_cleaned_choice_text() {
        let segmenter = create_test_segmenter();
        let text = "1. Compute\nA. –√2   exactly\nB. 2\nC. 3\nD. 4";

        let block = segmenter.extract_question(text, 1).unwrap().unwrap();
        assert_eq!(
            block.choices.get(&'A').map(String::as_str),
            Some("√2 exactly")
        );
    }
}

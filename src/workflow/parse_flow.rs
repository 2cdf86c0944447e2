//! 解析流程 - 流程层
//!
//! 核心职责：定义"一份文档"从字节到报告的完整流程
//!
//! 流程顺序：
//! 1. 栏切分（基础设施层）→ 逐栏噪声过滤 → 列主序拼接
//! 2. 答案区切分 → 三轮答案提取 → 确定题号上限
//! 3. 按题号逐个切题块、拆选项
//! 4. 汇总统计、找出缺失题号

use std::collections::BTreeSet;
use tracing::debug;

use crate::config::Config;
use crate::error::ExtractResult;
use crate::infrastructure::PdfTextExtractor;
use crate::models::{AnswerMap, ParseReport, Question};
use crate::services::question_segmenter::{QuestionBlock, CHOICE_LETTERS};
use crate::services::{AnswerKeyParser, BoilerplateFilter, QuestionSegmenter};

/// 缺失题号列表的展示上限
const MISSING_NUMBERS_CAP: usize = 20;

/// 文档解析流程
///
/// - 编排完整的解析流程
/// - 不持有文档资源（PdfTextExtractor 由编排层传入）
/// - 只依赖业务能力（services）
/// - 同一份输入重复解析得到完全相同的报告，中间不缓存任何状态
pub struct ParseFlow {
    filter: BoilerplateFilter,
    answer_parser: AnswerKeyParser,
    segmenter: QuestionSegmenter,
}

impl ParseFlow {
    /// 创建新的解析流程
    pub fn new(config: &Config) -> ExtractResult<Self> {
        Ok(Self {
            filter: BoilerplateFilter::new(&config.filter_rules)?,
            answer_parser: AnswerKeyParser::new(),
            segmenter: QuestionSegmenter::new(),
        })
    }

    /// 解析一份 PDF 文档
    ///
    /// # 参数
    /// - `extractor`: PDF 文本提取器（持有 pdfium 绑定）
    /// - `pdf_bytes`: PDF 文件内容
    ///
    /// # 返回
    /// 返回解析报告；字节缓冲打不开时返回 MalformedDocument
    pub fn parse(
        &self,
        extractor: &PdfTextExtractor,
        pdf_bytes: &[u8],
    ) -> ExtractResult<ParseReport> {
        // 文档句柄只在栏提取期间存活，进入切分阶段前已经释放
        let column_blocks = extractor.extract_column_blocks(pdf_bytes)?;
        let full_text = self.assemble_columns(&column_blocks);
        self.parse_text(&full_text)
    }

    /// 在已拼接的全文上执行文本流水线
    ///
    /// 这个入口不依赖 PDF 引擎，可用于对同一篇文本重复推导报告
    pub fn parse_text(&self, full_text: &str) -> ExtractResult<ParseReport> {
        let (questions_text, answer_region) = self.answer_parser.split_sections(full_text)?;
        let answers = self.answer_parser.extract(answer_region)?;
        let max_question = AnswerKeyParser::max_question_number(&answers);

        debug!("答案键提取到 {} 条，题号上限 {}", answers.len(), max_question);

        let mut questions = Vec::new();
        for number in 1..=max_question {
            let Some(block) = self.segmenter.extract_question(questions_text, number)? else {
                continue;
            };
            questions.push(self.build_question(number, block, &answers));
        }

        Ok(self.reconcile(questions, max_question))
    }

    /// 逐栏过滤噪声行后按列主序拼接成整篇文本
    pub fn assemble_columns(&self, column_blocks: &[String]) -> String {
        let mut full_text = String::new();
        for block in column_blocks {
            full_text.push_str(&self.filter.filter(block));
            full_text.push('\n');
        }
        full_text
    }

    /// 组装单个题目记录
    fn build_question(&self, number: u32, block: QuestionBlock, answers: &AnswerMap) -> Question {
        let mut choices = Vec::with_capacity(CHOICE_LETTERS.len());
        for letter in CHOICE_LETTERS {
            match block.choices.get(&letter) {
                Some(text) => choices.push(format!("{}. {}", letter, text)),
                None => choices.push(format!("{}. (Missing)", letter)),
            }
        }

        let correct_answer = answers
            .get(&number)
            .cloned()
            .unwrap_or_else(|| "N/A".to_string());

        Question {
            number,
            question: block.question_text,
            choices,
            correct_answer,
        }
    }

    /// 汇总统计并找出缺失题号
    fn reconcile(&self, questions: Vec<Question>, max_question: u32) -> ParseReport {
        let found: BTreeSet<u32> = questions.iter().map(|q| q.number).collect();
        let missing_numbers: Vec<u32> = (1..=max_question)
            .filter(|n| !found.contains(n))
            .take(MISSING_NUMBERS_CAP)
            .collect();

        let questions_with_answers = questions
            .iter()
            .filter(|q| q.correct_answer != "N/A")
            .count();

        ParseReport {
            total_questions: questions.len(),
            questions_with_answers,
            questions_without_answers: questions.len() - questions_with_answers,
            missing_numbers,
            questions,
        }
    }
}

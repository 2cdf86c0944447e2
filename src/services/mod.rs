pub mod answer_key;
pub mod boilerplate_filter;
pub mod question_segmenter;

pub use answer_key::AnswerKeyParser;
pub use boilerplate_filter::BoilerplateFilter;
pub use question_segmenter::{QuestionBlock, QuestionSegmenter};

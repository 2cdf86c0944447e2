pub mod question;

pub use question::{AnswerMap, ParseReport, Question};

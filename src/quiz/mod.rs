//! Quiz domain: the question bank, a session's progression and scoring, and
//! the flow that connects a session to answer feedback.

pub mod bank;
pub mod flow;
pub mod session;

pub use bank::{BankError, Question, QuestionBank, QuestionId};
pub use flow::QuizFlow;
pub use session::{Listener, Mode, QuizError, QuizEvent, QuizSession, Score};

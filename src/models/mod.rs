pub mod document;
pub mod loaders;
pub mod question;

pub use document::ExtractedDocument;
pub use loaders::{load_all_text_files, load_text_document};
pub use question::{Question, QuestionDraft, QuestionType, SubQuestion, EXPLANATION_TEXT};

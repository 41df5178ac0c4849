pub mod content_guard;
pub mod dedup_service;
pub mod flat_extractor;
pub mod grouped_extractor;
pub mod option_detector;
pub mod selector;

pub use content_guard::is_metadata_placeholder;
pub use dedup_service::{dedup_drafts, jaccard_similarity};
pub use flat_extractor::{FlatCandidate, FlatExtractor};
pub use grouped_extractor::GroupedExtractor;
pub use option_detector::OptionDetector;
pub use selector::select;

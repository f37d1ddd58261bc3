pub mod error;
pub use error::Error;

pub mod separator_set;
pub use separator_set::SeparatorSet;

pub mod tokenizer;
pub use tokenizer::{Token, Tokenizer, Tokens};

pub mod frequency_counter;
pub use frequency_counter::{count_word_frequencies, FrequencyCounter};

pub mod selection;
pub use selection::Selection;

pub mod tag_cloud_config;
pub use tag_cloud_config::TagCloudConfig;

pub mod tag_cloud_renderer;
pub use tag_cloud_renderer::TagCloudRenderer;

pub mod tag_cloud_summary;
pub use tag_cloud_summary::TagCloudSummary;

pub mod content_extractor;
pub mod keyword_pipeline;
pub mod markdown_writer;
pub mod page_fetcher;
pub mod search_provider;

pub use content_extractor::*;
pub use keyword_pipeline::*;
pub use markdown_writer::*;
pub use page_fetcher::*;
pub use search_provider::*;

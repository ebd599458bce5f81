pub mod extracted_page;
pub mod output_file;
pub mod search_result;

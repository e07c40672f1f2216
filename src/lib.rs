// Library API shared by the `wordsearch` CLI and `generate_error_docs`
pub mod coordinate;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod position_index;
pub mod puzzle;
pub mod report;
pub mod searcher;

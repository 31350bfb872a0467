//! Processor module for the category indexer.
//!
//! Transforms catalog categories into search index records.

mod category_mapper;

pub use category_mapper::CategoryMapper;

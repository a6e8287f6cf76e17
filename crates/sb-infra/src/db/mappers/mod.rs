pub mod snippet_mapper;

pub use snippet_mapper::SnippetRowMapper;

mod snippet_row;

pub use snippet_row::{NewSnippetRow, SnippetRow};

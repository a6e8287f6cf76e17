mod snippet;

pub use snippet::SnippetId;

//! Article extraction and keyword filtering
//!
//! Page-type classification, structured field extraction with sentinel
//! fallbacks, and whole-word keyword matching.

mod article;
mod keywords;

pub use article::{
    extract_article, is_article_page, ArticleDraft, ArticleRecord, SourceRef, AUTHOR_MISSING,
    DATE_MISSING, SOURCE_AUTHOR_MISSING, SOURCE_TITLE_MISSING, SOURCE_URL_MISSING, TITLE_MISSING,
};
pub use keywords::KeywordSet;

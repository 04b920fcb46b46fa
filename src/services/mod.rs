//! Job orchestration and the submission extractor.

pub mod extractor;
pub mod issue_parser;
pub mod site_checker;

pub use issue_parser::{IssueParserJob, ParserOptions};
pub use site_checker::{CheckerOptions, SiteCheckerJob};

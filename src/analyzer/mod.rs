mod generics;
mod scan;
mod strip;
mod types;

pub use generics::generic_suffix;
pub use scan::DeclarationScanner;
pub use strip::{CommentStripper, is_doc_comment_line};
pub use types::{DeclKind, Declaration, TypeKeyword};

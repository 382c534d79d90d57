//! Helper functions shared by the content pipeline and the generator

mod html;
mod url;

pub use html::*;
pub use url::*;

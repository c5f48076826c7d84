//! Extractors shared by the controllers.

/// JSON body extractor answering rejections with an `ErrorDto`
pub mod json;

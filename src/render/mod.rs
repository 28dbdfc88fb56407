//! Presentation formatting: plain text summaries and embeddable HTML views

pub mod html;
pub mod text;

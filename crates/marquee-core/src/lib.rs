//! Core contracts for Marquee.
//!
//! This crate owns the static film and television tables, the uniform
//! random selector that draws from them, and the zero-argument accessors
//! built on top of both.

pub mod category;
pub mod data;
pub mod error;
pub mod movie;
pub mod selector;
pub mod table;

pub use category::Category;
pub use error::{Error, Result};
pub use movie::{Movie, actor, actress, director, genre, movie_title, tv_show};
pub use selector::RandomSelector;
pub use table::CategoryTable;

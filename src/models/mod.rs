//! Data models for Bookly

pub mod book;

pub use book::{Book, BookPatch, BookRecord};

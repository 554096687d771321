//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record as stored in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// Free-form publication date (e.g. "2022-11-12")
    pub publisher_date: String,
    pub page_count: i32,
    pub language: String,
}

/// Book together with its collection id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookRecord {
    pub id: i32,
    #[serde(flatten)]
    pub book: Book,
}

/// Partial update request.
///
/// Each field has three states: absent (`None`), explicit `null`
/// (`Some(None)`) and a value (`Some(Some(v))`). Only values are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BookPatch {
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, nullable)]
    pub title: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, nullable)]
    pub author: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, nullable)]
    pub publisher: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, nullable)]
    pub publisher_date: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>, nullable)]
    pub page_count: Option<Option<i32>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, nullable)]
    pub language: Option<Option<String>>,
}

/// A patch tried to clear a field the book cannot be without
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field '{0}' cannot be null")]
pub struct ClearedField(pub &'static str);

impl BookPatch {
    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.publisher.is_none()
            && self.publisher_date.is_none()
            && self.page_count.is_none()
            && self.language.is_none()
    }

    /// Merge the provided fields over `book`, returning the updated copy.
    ///
    /// `book` itself is left alone so a failed merge never leaves a
    /// half-updated record behind.
    pub fn apply(&self, book: &Book) -> Result<Book, ClearedField> {
        let mut merged = book.clone();

        macro_rules! merge_field {
            ($field:ident) => {
                match &self.$field {
                    None => {}
                    Some(None) => return Err(ClearedField(stringify!($field))),
                    Some(Some(value)) => merged.$field = value.clone(),
                }
            };
        }

        merge_field!(title);
        merge_field!(author);
        merge_field!(publisher);
        merge_field!(publisher_date);
        merge_field!(page_count);
        merge_field!(language);

        Ok(merged)
    }
}

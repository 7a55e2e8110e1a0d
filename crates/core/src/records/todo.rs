//! Todo records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::RecordId;
use crate::validate;

use super::{double_option, Record};

/// Maximum title length in characters, after trimming.
pub const TITLE_MAX: usize = 200;
/// Maximum category length in characters, after trimming.
pub const CATEGORY_MAX: usize = 100;

/// A single todo item.
///
/// The title is stored trimmed. `category` is nullable on the wire and
/// serializes as an explicit `null` when unset, matching the original
/// payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
    pub category: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /todos`. New todos always start uncompleted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body of `PATCH /todos/{id}`. Absent fields are left untouched;
/// `category: null` clears the category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<String>>,
}

impl Record for Todo {
    type Draft = CreateTodo;
    type Patch = TodoPatch;

    const RESOURCE: &'static str = "todos";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn build(id: RecordId, draft: CreateTodo) -> Result<Self> {
        let title = validate::non_empty("title", &draft.title, TITLE_MAX)?;
        let category = match draft.category {
            Some(c) => Some(validate::bounded_text("category", &c, CATEGORY_MAX)?),
            None => None,
        };
        Ok(Todo {
            id,
            title,
            completed: false,
            category,
            created_at: Utc::now(),
        })
    }

    fn apply(&mut self, patch: TodoPatch) -> Result<()> {
        // Validate everything before assigning anything.
        let title = match patch.title {
            Some(t) => Some(validate::non_empty("title", &t, TITLE_MAX)?),
            None => None,
        };
        let category = match patch.category {
            Some(Some(c)) => Some(Some(validate::bounded_text(
                "category",
                &c,
                CATEGORY_MAX,
            )?)),
            Some(None) => Some(None),
            None => None,
        };

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(category) = category {
            self.category = category;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            category: None,
        }
    }

    #[test]
    fn test_build_trims_title_and_starts_uncompleted() {
        let todo = Todo::build(RecordId::from("t1"), draft("  write tests  ")).unwrap();
        assert_eq!(todo.title, "write tests");
        assert!(!todo.completed);
        assert_eq!(todo.category, None);
    }

    #[test]
    fn test_build_rejects_empty_title() {
        let err = Todo::build(RecordId::from("t1"), draft("   ")).unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn test_build_rejects_oversized_category() {
        let d = CreateTodo {
            title: "ok".to_string(),
            category: Some("c".repeat(101)),
        };
        let err = Todo::build(RecordId::from("t1"), d).unwrap_err();
        assert_eq!(err.field(), Some("category"));
    }

    #[test]
    fn test_apply_partial_keeps_absent_fields() {
        let mut todo = Todo::build(RecordId::from("t1"), draft("original")).unwrap();
        todo.category = Some("general".to_string());

        todo.apply(TodoPatch {
            completed: Some(true),
            ..Default::default()
        })
        .unwrap();

        assert!(todo.completed);
        assert_eq!(todo.title, "original");
        assert_eq!(todo.category.as_deref(), Some("general"));
    }

    #[test]
    fn test_apply_null_clears_category() {
        let mut todo = Todo::build(RecordId::from("t1"), draft("x")).unwrap();
        todo.category = Some("general".to_string());

        let patch: TodoPatch = serde_json::from_str(r#"{"category": null}"#).unwrap();
        todo.apply(patch).unwrap();
        assert_eq!(todo.category, None);
    }

    #[test]
    fn test_apply_absent_category_leaves_it_alone() {
        let mut todo = Todo::build(RecordId::from("t1"), draft("x")).unwrap();
        todo.category = Some("general".to_string());

        let patch: TodoPatch = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        todo.apply(patch).unwrap();
        assert_eq!(todo.category.as_deref(), Some("general"));
    }

    #[test]
    fn test_apply_invalid_title_changes_nothing() {
        let mut todo = Todo::build(RecordId::from("t1"), draft("keep me")).unwrap();
        let before = todo.clone();

        let patch = TodoPatch {
            title: Some("  ".to_string()),
            completed: Some(true),
            ..Default::default()
        };
        assert!(todo.apply(patch).is_err());
        assert_eq!(todo, before);
    }

    #[test]
    fn test_wire_shape_uses_camel_case_created_at() {
        let todo = Todo::build(RecordId::from("t1"), draft("x")).unwrap();
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("createdAt").is_some());
        // category is always present, null when unset
        assert!(json.get("category").unwrap().is_null());
    }
}

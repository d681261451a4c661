//! Todo List Operations
//!
//! Pure functions over the ordered todo list. The store applies these and
//! handles persistence; everything here is unit-testable without a browser.

use crate::models::{Draft, DraftRejected, Todo};

/// Next id: one past the highest live id (1 for an empty list).
/// Ids grow monotonically and are never reused, so deletions leave gaps.
pub fn next_id(todos: &[Todo]) -> u32 {
    todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1
}

/// True when a draft title is empty or whitespace-only
pub fn blank_title(title: &str) -> bool {
    title.trim().is_empty()
}

/// Commit a draft as a new todo appended to the list.
///
/// A blank title is rejected and the caller's list and draft stay untouched.
/// The stored title keeps the draft's exact text, including any whitespace
/// around a non-blank title.
pub fn created_from_draft(todos: &[Todo], draft: &Draft) -> Result<Vec<Todo>, DraftRejected> {
    if blank_title(&draft.title) {
        return Err(DraftRejected::BlankTitle);
    }
    let mut next = todos.to_vec();
    next.push(Todo {
        id: next_id(todos),
        title: draft.title.clone(),
        description: draft.description.clone(),
    });
    Ok(next)
}

/// New list with the matching todo's title and description replaced.
///
/// Builds a fresh record and a fresh sequence rather than mutating the
/// existing one; the record keeps its id and position. An unknown id
/// returns a value-equal list.
pub fn with_updated(todos: &[Todo], id: u32, title: &str, description: &str) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    id,
                    title: title.to_string(),
                    description: description.to_string(),
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// New list without the matching todo. An unknown id returns a value-equal
/// list, so delete is idempotent.
pub fn without(todos: &[Todo], id: u32) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| todo.id != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str, description: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn draft(title: &str, description: &str) -> Draft {
        Draft {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_first_todo_gets_id_one() {
        let todos = created_from_draft(&[], &draft("A", "x")).unwrap();
        assert_eq!(todos, vec![make_todo(1, "A", "x")]);
    }

    #[test]
    fn test_ids_strictly_increase_across_creates() {
        let mut todos = Vec::new();
        for title in ["a", "b", "c"] {
            todos = created_from_draft(&todos, &draft(title, "")).unwrap();
        }
        let ids: Vec<u32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_next_id_skips_deletion_gaps() {
        // [1, 3] -> new id is 4, the gap at 2 is never refilled
        let todos = vec![make_todo(1, "a", ""), make_todo(3, "c", "")];
        assert_eq!(next_id(&todos), 4);
        let todos = created_from_draft(&todos, &draft("d", "")).unwrap();
        assert_eq!(todos.last().unwrap().id, 4);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let todos = vec![make_todo(1, "a", "")];
        assert_eq!(
            created_from_draft(&todos, &draft("", "desc")),
            Err(DraftRejected::BlankTitle)
        );
        assert_eq!(
            created_from_draft(&todos, &draft("  \t\n", "desc")),
            Err(DraftRejected::BlankTitle)
        );
        // the input list is untouched either way
        assert_eq!(todos, vec![make_todo(1, "a", "")]);
    }

    #[test]
    fn test_update_preserves_id_and_position() {
        let todos = vec![make_todo(1, "A", "x"), make_todo(2, "B", "y")];
        let updated = with_updated(&todos, 1, "B2", "x");
        assert_eq!(updated[0], make_todo(1, "B2", "x"));
        assert_eq!(updated[1], todos[1]);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let todos = vec![make_todo(1, "A", "x")];
        assert_eq!(with_updated(&todos, 99, "B", "y"), todos);
    }

    #[test]
    fn test_delete_removes_only_matching_id() {
        let todos = vec![make_todo(1, "A", ""), make_todo(2, "B", "")];
        assert_eq!(without(&todos, 1), vec![make_todo(2, "B", "")]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let todos = vec![make_todo(1, "A", ""), make_todo(2, "B", "")];
        assert_eq!(without(&todos, 99), todos);
    }
}

//! Durable Todo Storage
//!
//! Mirrors the todo list to browser localStorage as a JSON array under a
//! fixed key. Anything missing or unreadable loads as an empty list; a
//! context without localStorage degrades to memory-only operation.

use web_sys::console;

use crate::models::Todo;

/// localStorage slot holding the serialized list
const STORAGE_KEY: &str = "todos";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted list from localStorage
pub fn load_todos() -> Vec<Todo> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) | Err(_) => return Vec::new(),
    };
    match parse_todos(&raw) {
        Ok(todos) => todos,
        Err(err) => {
            console::warn_1(&format!("[STORAGE] discarding unreadable todos: {}", err).into());
            Vec::new()
        }
    }
}

/// Overwrite the persisted list with the current one
pub fn save_todos(todos: &[Todo]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match encode_todos(todos) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                console::warn_1(&"[STORAGE] failed to write todos".into());
            }
        }
        Err(err) => {
            console::warn_1(&format!("[STORAGE] failed to encode todos: {}", err).into());
        }
    }
}

fn parse_todos(raw: &str) -> Result<Vec<Todo>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn encode_todos(todos: &[Todo]) -> Result<String, serde_json::Error> {
    serde_json::to_string(todos)
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

    #[test]
    fn test_encode_parse_round_trip() {
        let todos = vec![make_todo(1, "A", "x"), make_todo(3, "B", "")];
        let json = encode_todos(&todos).unwrap();
        assert_eq!(parse_todos(&json).unwrap(), todos);
    }

    #[test]
    fn test_serialized_shape() {
        let json = encode_todos(&[make_todo(1, "A", "x")]).unwrap();
        assert_eq!(json, r#"[{"id":1,"title":"A","description":"x"}]"#);
    }

    #[test]
    fn test_empty_list_round_trip() {
        let json = encode_todos(&[]).unwrap();
        assert_eq!(json, "[]");
        assert_eq!(parse_todos(&json).unwrap(), Vec::<Todo>::new());
    }

    #[test]
    fn test_malformed_value_fails_to_parse() {
        assert!(parse_todos("not json").is_err());
        assert!(parse_todos(r#"{"id":1}"#).is_err());
        assert!(parse_todos(r#"[{"id":"one"}]"#).is_err());
    }
}

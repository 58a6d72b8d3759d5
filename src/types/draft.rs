use serde::{Deserialize, Serialize};

use super::Field;

/// The unsaved values of the user being created.
///
/// Serializes to exactly the request body the endpoint expects:
/// `{"name", "gender", "age", "email", "phone"}`, all strings as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub email: String,
    pub phone: String,
}

impl UserDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Age => &self.age,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Gender => &mut self.gender,
            Field::Age => &mut self.age,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every field is blank.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_only_one_field() {
        let mut draft = UserDraft::default();
        draft.set(Field::Email, "a@b.com");
        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.name, "");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut draft = UserDraft::default();
        for field in Field::ALL {
            draft.set(field, "x");
        }
        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_json_keys_match_field_keys() {
        let draft = UserDraft {
            name: "Ada".into(),
            gender: "F".into(),
            age: "30".into(),
            email: "a@b.com".into(),
            phone: "(555) 123-4567".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for field in Field::ALL {
            assert_eq!(object[field.key()], draft.get(field));
        }
    }
}

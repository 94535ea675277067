// src/shared/patch.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the field (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior (recommended usage):
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Required fields cannot be cleared: `Null` behaves like `Unset`.
    pub fn apply_to(self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v;
        }
    }

    pub fn apply_to_option(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

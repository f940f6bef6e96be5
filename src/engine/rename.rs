//! Rename policy engine
//!
//! One pure routine decides, for a single name, whether a directive renames
//! it and to what. `apply` folds that decision over a collection of named
//! items and returns how many were renamed. There is no cross-item state
//! beyond the running count, and an item is either renamed exactly once or
//! left untouched.
//!
//! # Counting Rules
//!
//! | Operation               | Renamed when | Count |
//! |-------------------------|--------------|-------|
//! | FindReplace (exact)     | name == find | matches only |
//! | FindReplace (substring) | find ⊆ name  | matches only, all occurrences replaced |
//! | Prefix                  | always       | collection size |
//! | Suffix                  | always       | collection size |
//!
//! The count reflects matches, not actual change: find == replace still
//! counts every matching item.

use crate::scene::Named;
use crate::types::OperationKind;

/// An immutable description of one renaming operation.
///
/// Constructed fresh per invocation from shell input; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameDirective {
    pub operation: OperationKind,
    pub find: String,
    pub replace: String,
    pub prefix: String,
    pub suffix: String,
    pub exact_match: bool,
}

impl RenameDirective {
    /// Find & replace directive
    pub fn find_replace(
        find: impl Into<String>,
        replace: impl Into<String>,
        exact_match: bool,
    ) -> Self {
        Self {
            operation: OperationKind::FindReplace,
            find: find.into(),
            replace: replace.into(),
            exact_match,
            ..Self::default()
        }
    }

    /// Prefix directive
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            operation: OperationKind::Prefix,
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Suffix directive
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self {
            operation: OperationKind::Suffix,
            suffix: suffix.into(),
            ..Self::default()
        }
    }

    /// Decide the new name for one item, or `None` to leave it untouched.
    ///
    /// An empty `find` under substring matching is treated as a no-op rather
    /// than inheriting `str::replace`'s empty-pattern behavior; exact
    /// matching with an empty `find` still matches empty names only.
    pub fn rename_one(&self, name: &str) -> Option<String> {
        match self.operation {
            OperationKind::FindReplace => {
                if self.exact_match {
                    (name == self.find).then(|| self.replace.clone())
                } else if self.find.is_empty() {
                    None
                } else if name.contains(&self.find) {
                    Some(name.replace(&self.find, &self.replace))
                } else {
                    None
                }
            }
            OperationKind::Prefix => Some(format!("{}{}", self.prefix, name)),
            OperationKind::Suffix => Some(format!("{}{}", name, self.suffix)),
        }
    }

    /// Apply the directive to every item in a collection.
    ///
    /// Returns the number of items renamed.
    pub fn apply<'a, T, I>(&self, items: I) -> usize
    where
        T: Named + 'a,
        I: IntoIterator<Item = &'a mut T>,
    {
        let mut renamed = 0;

        for item in items {
            if let Some(new_name) = self.rename_one(item.name()) {
                item.set_name(new_name);
                renamed += 1;
            }
        }

        renamed
    }
}

//! I18n Interfaces
//!
//! Compiled state of ICU expressions (`{count, plural, ...}` and
//! `{gender, select, ...}` blocks).

use serde::{Deserialize, Serialize};

/// Case used when no other case matches the bound value.
pub const OTHER_CASE: &str = "other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum IcuType {
    Select = 0,
    Plural = 1,
}

/// Static ICU data shared by all instances of a template.
///
/// An ICU has no node identity of its own. It lives either directly in a view
/// slot or inside the `TNode` of the ICU container anchoring it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TIcu {
    pub icu_type: IcuType,
    /// Case keys in declaration order, e.g. `["=0", "one", "other"]`.
    pub cases: Vec<String>,
    /// Position in `cases` of the active case, `None` when nothing matched.
    pub selected: Option<usize>,
    /// View slot holding the rendered content of the active case.
    pub current_case_l_view_index: usize,
    /// View slot of the comment node the ICU content is inserted before.
    pub anchor_idx: usize,
}

impl TIcu {
    pub fn new(
        icu_type: IcuType,
        cases: Vec<String>,
        current_case_l_view_index: usize,
        anchor_idx: usize,
    ) -> Self {
        TIcu {
            icu_type,
            cases,
            selected: None,
            current_case_l_view_index,
            anchor_idx,
        }
    }

    pub fn selected_case(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.cases.get(index))
            .map(String::as_str)
    }

    /// Resolves the case matching a bound value.
    ///
    /// Exact keys win. Plural ICUs also accept a numeric value for an `=N`
    /// key. Anything else falls through to `other` when it is declared.
    pub fn case_index(&self, value: &str) -> Option<usize> {
        let position = |key: &str| self.cases.iter().position(|case| case == key);

        position(value)
            .or_else(|| match self.icu_type {
                IcuType::Plural if value.parse::<f64>().is_ok() => {
                    position(format!("={}", value).as_str())
                }
                _ => None,
            })
            .or_else(|| position(OTHER_CASE))
    }

    /// Updates the active case for a new binding value and returns it.
    pub fn select_case(&mut self, value: &str) -> Option<usize> {
        self.selected = self.case_index(value);
        self.selected
    }
}

//! Aggregate enabled state for the select-all control.
//!
//! These work on any sequence of enabled flags so the empty case keeps its
//! usual meaning: all of nothing is enabled, none of it is.

/// True iff every flag is set. Vacuously true for no flags.
pub fn all_enabled(flags: impl IntoIterator<Item = bool>) -> bool {
    flags.into_iter().all(|enabled| enabled)
}

/// True iff at least one flag is set.
pub fn any_enabled(flags: impl IntoIterator<Item = bool>) -> bool {
    flags.into_iter().any(|enabled| enabled)
}

/// True iff some but not all flags are set.
pub fn partially_enabled<I>(flags: I) -> bool
where
    I: IntoIterator<Item = bool>,
    I::IntoIter: Clone,
{
    let flags = flags.into_iter();
    any_enabled(flags.clone()) && !all_enabled(flags)
}

/// Visual state of the select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectAllState {
    /// Every shortcut enabled
    Checked,
    /// No shortcut enabled
    Unchecked,
    /// Mixed
    Indeterminate,
}

impl SelectAllState {
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
        I::IntoIter: Clone,
    {
        let flags = flags.into_iter();
        if all_enabled(flags.clone()) {
            SelectAllState::Checked
        } else if any_enabled(flags) {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        self == SelectAllState::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == SelectAllState::Indeterminate
    }
}

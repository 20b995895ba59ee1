/// Keys the control reacts to
///
/// Printable characters and editing keys other than Backspace reach the
/// control as text changes, not as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeaheadKey {
    Enter,
    Escape,
    ArrowDown,
    ArrowUp,
    Backspace,
    Other,
}

/// What the renderer should do with a key after the control has seen it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Not intercepted; the renderer's own behavior applies
    Default,
    /// Intercepted; the renderer must suppress its default action
    Prevented,
    /// Consumed as a commit of the typed text
    Committed,
}

impl KeyDisposition {
    /// Whether the renderer may still act on the key
    pub fn falls_through(self) -> bool {
        self == KeyDisposition::Default
    }
}

use super::phone::GroupingRule;

/// All messages that can be sent through the FLTK channel.
/// Input callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The text of the phone field with this id changed
    PhoneEdited(String),
    SetGroupingRule(GroupingRule),
    ToggleDarkMode,
    Quit,
}

use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::phone::GroupingRule;
use crate::app::domain::settings::{AppSettings, ThemeMode};

/// Grouping presets offered under Format/Grouping.
pub const GROUPING_PRESETS: &[(&str, GroupingRule)] = &[
    ("Pairs (06 12 34)", GroupingRule { group_size: 2, separator: ' ' }),
    ("Triples (061 234)", GroupingRule { group_size: 3, separator: ' ' }),
    ("Dotted pairs (06.12.34)", GroupingRule { group_size: 2, separator: '.' }),
];

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    let dm_flag = if settings.theme_mode == ThemeMode::Dark { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Format
    let current = settings.grouping_rule_or_default();
    for (label, rule) in GROUPING_PRESETS {
        let flag = if *rule == current { MenuFlag::Radio | MenuFlag::Value } else { MenuFlag::Radio };
        let rule = *rule;
        menu.add(&format!("Format/Grouping/{}", label), Shortcut::None, flag, { let s = *s; move |_| s.send(Message::SetGroupingRule(rule)) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid_settings() {
        for (label, rule) in GROUPING_PRESETS {
            let settings = AppSettings {
                phone_group_size: rule.group_size,
                phone_separator: rule.separator,
                ..Default::default()
            };
            assert_eq!(settings.grouping_rule().unwrap(), *rule, "{}", label);
        }
    }

    #[test]
    fn test_preset_labels_match_rules() {
        for (label, rule) in GROUPING_PRESETS {
            let sample: String = label
                .split_once('(')
                .map(|(_, rest)| rest.trim_end_matches(')'))
                .unwrap()
                .to_string();
            assert_eq!(rule.apply(&sample), sample, "{}", label);
        }
    }
}

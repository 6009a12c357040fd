use std::path::PathBuf;

use crate::app::domain::messages::Message;
use crate::app::domain::settings::{AppSettings, ThemeMode};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::field::{FieldRegistry, TextField};
use crate::app::services::formatter::PhoneFormatter;

/// What the dispatch loop should do after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    ThemeChanged(ThemeMode),
    Quit,
}

/// Routes form messages to the phone formatter.
pub struct FormController<F: TextField> {
    pub fields: FieldRegistry<F>,
    pub formatter: PhoneFormatter,
    pub settings: AppSettings,
    settings_path: PathBuf,
}

impl<F: TextField> FormController<F> {
    pub fn new(fields: FieldRegistry<F>, settings: AppSettings) -> Self {
        let formatter = PhoneFormatter::new(settings.grouping_rule_or_default());
        Self {
            fields,
            formatter,
            settings,
            settings_path: AppSettings::get_config_path(),
        }
    }

    /// Persist settings changes to `path` instead of the user config dir.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Handle one message.
    ///
    /// Lookup failures are logged before being returned.
    pub fn handle(&mut self, msg: Message) -> Result<Outcome> {
        match msg {
            Message::PhoneEdited(id) => {
                if let Err(e) = self.formatter.format_by_id(&mut self.fields, &id) {
                    tracing::error!("Cannot format phone field: {}", e);
                    return Err(e);
                }
                Ok(Outcome::Continue)
            }
            Message::SetGroupingRule(rule) => {
                let candidate = AppSettings {
                    phone_group_size: rule.group_size,
                    phone_separator: rule.separator,
                    ..self.settings.clone()
                };
                let rule = candidate.grouping_rule()?;
                self.settings = candidate;
                self.formatter.set_rule(rule);
                let changed = self.formatter.format_all(&mut self.fields);
                tracing::debug!(?rule, changed, "grouping rule updated");
                self.persist();
                Ok(Outcome::Continue)
            }
            Message::ToggleDarkMode => {
                self.settings.theme_mode = match self.settings.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                self.persist();
                Ok(Outcome::ThemeChanged(self.settings.theme_mode))
            }
            Message::Quit => Ok(Outcome::Quit),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.settings.save_to(&self.settings_path) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

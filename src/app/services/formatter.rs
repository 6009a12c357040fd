use crate::app::domain::phone::GroupingRule;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::field::{FieldRegistry, TextField};

/// Rewrites phone fields in place as grouped digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneFormatter {
    rule: GroupingRule,
}

impl PhoneFormatter {
    pub fn new(rule: GroupingRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> GroupingRule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: GroupingRule) {
        self.rule = rule;
    }

    /// Reformat `field` in place.
    ///
    /// Returns `true` when the text changed. An unchanged value is not
    /// written back, so a change callback that fires on our own write
    /// settles after one pass.
    pub fn format<F: TextField + ?Sized>(&self, field: &mut F) -> bool {
        let current = field.text();
        let formatted = self.rule.apply(&current);
        if formatted == current {
            return false;
        }
        field.set_text(&formatted);
        true
    }

    /// Look up `id` in `registry` and reformat that field.
    pub fn format_by_id<F: TextField>(&self, registry: &mut FieldRegistry<F>, id: &str) -> Result<bool> {
        let field = registry.get_mut(id)?;
        let changed = self.format(field);
        tracing::trace!(field = id, changed, "formatted phone field");
        Ok(changed)
    }

    /// Reformat every registered field, e.g. after the rule changed.
    pub fn format_all<F: TextField>(&self, registry: &mut FieldRegistry<F>) -> usize {
        let ids: Vec<String> = registry.ids().map(str::to_string).collect();
        ids.iter()
            .filter(|id| matches!(self.format_by_id(registry, id), Ok(true)))
            .count()
    }
}

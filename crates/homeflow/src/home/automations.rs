use tracing::debug;
use tracing::info;

use super::model::AutomationRule;

/// In-memory automation rules. The rules are descriptive only.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<AutomationRule>,
}

impl RuleRegistry {
    pub fn new(rules: Vec<AutomationRule>) -> Self {
        Self { rules }
    }

    pub fn list(&self) -> &[AutomationRule] {
        &self.rules
    }

    pub fn toggle(&mut self, id: &str) -> Option<&AutomationRule> {
        let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) else {
            debug!("toggle for unknown rule {}, ignoring", id);
            return None;
        };

        rule.active = !rule.active;
        info!("Rule {} ({}) -> active={}", rule.id, rule.name, rule.active);

        Some(&*rule)
    }

    /// Remove a rule. Deleting an unknown id leaves the list untouched.
    pub fn delete(&mut self, id: &str) -> Option<AutomationRule> {
        let Some(index) = self.rules.iter().position(|r| r.id == id) else {
            debug!("delete for unknown rule {}, ignoring", id);
            return None;
        };

        let rule = self.rules.remove(index);
        info!("Rule {} ({}) deleted", rule.id, rule.name);

        Some(rule)
    }
}

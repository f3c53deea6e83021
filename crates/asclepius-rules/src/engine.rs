//! The rule engine: owns the prioritized rule set and applies it to batches.

use asclepius_common::AppResult;

use crate::compiler::compile_condition;
use crate::config::RuleDescription;
use crate::constraint::{AllOf, Constraint};
use crate::record::Record;

/// A named, prioritized, compiled rule.
pub struct Rule {
    name: String,
    priority: i64,
    condition: AllOf,
}

impl Rule {
    pub fn new(name: impl Into<String>, condition: AllOf, priority: i64) -> Self {
        Self {
            name: name.into(),
            priority,
            condition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Check whether the record satisfies this rule's condition.
    pub fn matches(&self, record: &Record) -> bool {
        self.condition.matches(record)
    }

    /// Human-readable rendering of the compiled condition.
    pub fn describe(&self) -> String {
        self.condition.description()
    }
}

/// Holds the full compiled rule set and filters record batches against it.
///
/// Priority orders the rules for diagnostics and lets evaluation try
/// likely-failing rules first; it has no effect on the outcome, since a
/// record must satisfy every rule to pass.
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Compile an ordered sequence of rule descriptions into an engine.
    ///
    /// The first malformed condition aborts construction — no partial engine
    /// is built. Rules end up sorted by descending priority; descriptions
    /// with equal priority keep their original relative order.
    pub fn from_configs(configs: Vec<RuleDescription>) -> AppResult<Self> {
        let mut rules = Vec::with_capacity(configs.len());
        for config in configs {
            let condition = compile_condition(&config.condition)?;
            rules.push(Rule::new(config.name, condition, config.priority));
        }

        let mut engine = Self { rules };
        engine.sort_rules();
        Ok(engine)
    }

    /// Append a rule to the live set.
    ///
    /// Re-sorts eagerly on every add, so the rule list is always in priority
    /// order.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
        self.sort_rules();
    }

    /// Stable sort by descending priority; ties keep insertion order.
    fn sort_rules(&mut self) {
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// The compiled rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Check a single record against every rule (pure conjunction).
    ///
    /// Short-circuits on the first failing rule. An empty rule set accepts
    /// every record.
    pub fn matches_all(&self, record: &Record) -> bool {
        self.rules.iter().all(|rule| rule.matches(record))
    }

    /// Keep the records that satisfy every rule.
    ///
    /// The output is a subsequence of the input: original relative order,
    /// no re-sorting by priority, no mutation of the inputs.
    pub fn filter_records<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records
            .iter()
            .filter(|record| self.matches_all(record))
            .collect()
    }
}

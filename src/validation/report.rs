//! Report Aggregator
//!
//! Combines the structural outcome, system results and adherence items into
//! the final report. No validation happens here.

use std::fmt;

use serde::Serialize;

use crate::schema::StructuralOutcome;

use super::checker::SystemResults;
use super::item::ValidationItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    #[serde(rename = "schema")]
    pub structural: StructuralOutcome,
    pub system: SystemSection,
    pub user_adherence: AdherenceSection,
    pub summary: Summary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemSection {
    pub contrast: Vec<ValidationItem>,
    pub typography: Vec<ValidationItem>,
    pub spacing: Vec<ValidationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdherenceSection {
    pub items: Vec<ValidationItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Structural pass and zero system-level failures
    pub system_pass: bool,
    pub system_failures: usize,
}

impl ValidationReport {
    pub fn assemble(
        structural: StructuralOutcome,
        system: SystemResults,
        adherence: Vec<ValidationItem>,
    ) -> Self {
        let system_failures = system.failures();
        let summary = Summary {
            system_pass: structural.ok && system_failures == 0,
            system_failures,
        };

        Self {
            structural,
            system: SystemSection {
                contrast: system.contrast,
                typography: system.typography,
                spacing: system.spacing,
            },
            user_adherence: AdherenceSection { items: adherence },
            summary,
        }
    }

    /// All system-level items in report order
    pub fn system_items(&self) -> impl Iterator<Item = &ValidationItem> {
        self.system
            .contrast
            .iter()
            .chain(&self.system.typography)
            .chain(&self.system.spacing)
    }

    pub fn find(&self, id: &str) -> Option<&ValidationItem> {
        self.system_items()
            .chain(&self.user_adherence.items)
            .find(|item| item.id == id)
    }
}

fn mark(ok: bool) -> &'static str {
    if ok { "PASS" } else { "FAIL" }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "schema: {}", mark(self.structural.ok))?;
        for issue in &self.structural.errors {
            writeln!(f, "  {}: {}", issue.path, issue.message)?;
        }

        if !self.structural.ok {
            writeln!(f, "system: skipped")?;
        }
        for item in self.system_items() {
            writeln!(f, "[{}] {} {}", mark(item.ok), item.id, item.message)?;
        }

        for item in &self.user_adherence.items {
            let tag = if item.ok { "ok" } else { "note" };
            writeln!(f, "({}) {} {}", tag, item.id, item.message)?;
        }

        writeln!(
            f,
            "summary: {} ({} system failure(s))",
            mark(self.summary.system_pass),
            self.summary.system_failures
        )
    }
}

//! Human-readable filter output.
//!
//! Takes a filter result and produces display lines, a titled match list,
//! and a boxed summary report.

use crate::filter::Filtered;
use persona_core::{FieldMap, Tag};
use serde_json::Value;
use std::fmt::Display;
use std::time::Duration;

/// Summary of one filter call.
#[derive(Debug, Clone)]
pub struct FilterReport {
    pub source: String,
    pub variant: Tag,
    pub criteria: FieldMap,
    pub scanned: usize,
    pub matched: usize,
    pub elapsed: Duration,
}

impl FilterReport {
    /// Build a report from the call inputs and its result.
    pub fn build(
        source: impl Into<String>,
        criteria: &FieldMap,
        scanned: usize,
        filtered: &Filtered,
        elapsed: Duration,
    ) -> Self {
        FilterReport {
            source: source.into(),
            variant: filtered.tag(),
            criteria: criteria.clone(),
            scanned,
            matched: filtered.len(),
            elapsed,
        }
    }

    /// Heading for the match list, e.g. `Users matching age=23:`.
    pub fn title(&self) -> String {
        heading(self.variant, &self.criteria)
    }

    /// Render the summary box followed by the match list.
    pub fn render(&self, filtered: &Filtered) -> String {
        let mut out = String::new();

        out.push('\n');
        out.push_str("╔══════════════════════════════════════════════════════════════╗\n");
        out.push_str("║                    PERSONA FILTER REPORT                     ║\n");
        out.push_str("╠══════════════════════════════════════════════════════════════╣\n");
        out.push_str(&format!("║  Source:             {:>40} ║\n", self.source));
        out.push_str(&format!("║  Variant:            {:>40} ║\n", self.variant));
        out.push_str(&format!(
            "║  Criteria:           {:>40} ║\n",
            describe_criteria(&self.criteria)
        ));
        out.push_str(&format!("║  Scanned:            {:>40} ║\n", self.scanned));
        out.push_str(&format!("║  Matched:            {:>40} ║\n", self.matched));
        out.push_str(&format!("║  Elapsed:            {:>40?} ║\n", self.elapsed));
        out.push_str("╚══════════════════════════════════════════════════════════════╝\n");
        out.push('\n');
        out.push_str(&render_lines(&self.title(), &filtered.lines()));
        out
    }
}

/// `Users matching age=23:`, or `All users:` when nothing is constrained.
pub fn heading(variant: Tag, criteria: &FieldMap) -> String {
    let plural = match variant {
        Tag::User => "users",
        Tag::Admin => "admins",
    };
    if criteria.is_empty() {
        format!("All {plural}:")
    } else {
        let mut title = format!("{plural} matching {}:", describe_criteria(criteria));
        title[..1].make_ascii_uppercase();
        title
    }
}

/// `age=23, role=World saver`; `any` when empty.
pub fn describe_criteria(criteria: &FieldMap) -> String {
    if criteria.is_empty() {
        return "any".to_string();
    }
    criteria
        .iter()
        .map(|(field, value)| match value {
            Value::String(s) => format!("{field}={s}"),
            other => format!("{field}={other}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// A title line followed by ` - <record>` for each record.
pub fn render_list<V: Display>(title: &str, records: &[V]) -> String {
    let lines: Vec<String> = records.iter().map(ToString::to_string).collect();
    render_lines(title, &lines)
}

fn render_lines(title: &str, lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    if lines.is_empty() {
        out.push_str(" (no matches)\n");
    }
    for line in lines {
        out.push_str(" - ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::{Admin, User};
    use serde_json::json;

    fn fields(v: Value) -> FieldMap {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn list_prefixes_each_record() {
        let users = vec![
            User {
                name: "Kate Müller".into(),
                age: 23,
                occupation: "Astronaut".into(),
            },
            User {
                name: "Wilson".into(),
                age: 23,
                occupation: "Ball".into(),
            },
        ];
        assert_eq!(
            render_list("Users of age 23:", &users),
            "Users of age 23:\n - Kate Müller, 23, Astronaut\n - Wilson, 23, Ball\n"
        );
    }

    #[test]
    fn empty_list_says_so() {
        let none: Vec<Admin> = Vec::new();
        assert_eq!(render_list("Admins:", &none), "Admins:\n (no matches)\n");
    }

    #[test]
    fn criteria_description_unquotes_strings() {
        let c = fields(json!({"age": 64, "role": "World saver"}));
        assert_eq!(describe_criteria(&c), "age=64, role=World saver");
        assert_eq!(describe_criteria(&FieldMap::new()), "any");
    }

    #[test]
    fn heading_reflects_variant_and_criteria() {
        assert_eq!(heading(Tag::User, &FieldMap::new()), "All users:");
        assert_eq!(
            heading(Tag::Admin, &fields(json!({"age": 23}))),
            "Admins matching age=23:"
        );
    }

    #[test]
    fn report_counts_and_renders_matches() {
        let filtered = Filtered::Admins(vec![Admin {
            name: "Agent Smith".into(),
            age: 23,
            role: "Anti-virus engineer".into(),
        }]);
        let criteria = fields(json!({"age": 23}));
        let report = FilterReport::build("test", &criteria, 6, &filtered, Duration::ZERO);

        assert_eq!(report.variant, Tag::Admin);
        assert_eq!((report.scanned, report.matched), (6, 1));

        let text = report.render(&filtered);
        assert!(text.contains("PERSONA FILTER REPORT"));
        assert!(text.contains("Admins matching age=23:\n - Agent Smith, 23, Anti-virus engineer\n"));
    }
}

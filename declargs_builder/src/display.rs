use std::collections::HashMap;

const TABLE_GAP: &str = "   ";
const COLUMN_GAP: &str = "  ";
const KEY_HEADER: &str = "arg";
const VALUE_HEADER: &str = "value";

/// A single reportable item within a parameter summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A leaf parameter: field name and rendered value.
    Value {
        /// The field name.
        name: String,
        /// The rendered value (typically via `std::fmt::Debug`).
        value: String,
    },
    /// A nested sub-command group.
    /// Only the selected branch appears; unselected branches are omitted.
    Group {
        /// The field name of the discriminator.
        name: String,
        /// The sub-command type name.
        type_name: String,
        /// The sub-command's own entries, in declaration order.
        entries: Vec<Entry>,
    },
}

/// Behaviour for summarizing a populated parameter structure.
///
/// Typically generated by the derive macros, although it may also be implemented by hand.
///
/// ### Example
/// ```
/// # use declargs_builder as declargs;
/// use declargs::{render_line, Entry, Summary};
///
/// struct Params {
///     verbose: bool,
///     item: String,
/// }
///
/// impl Summary for Params {
///     fn type_name(&self) -> &'static str {
///         "Params"
///     }
///
///     fn entries(&self) -> Vec<Entry> {
///         vec![
///             Entry::Value {
///                 name: "verbose".to_string(),
///                 value: format!("{:?}", self.verbose),
///             },
///             Entry::Value {
///                 name: "item".to_string(),
///                 value: format!("{:?}", self.item),
///             },
///         ]
///     }
/// }
///
/// let params = Params {
///     verbose: true,
///     item: "abc".to_string(),
/// };
/// assert_eq!(render_line(&params), "Params(verbose=true, item=\"abc\")");
/// ```
pub trait Summary {
    /// The type name used as the summary heading.
    fn type_name(&self) -> &'static str;

    /// The entries of the summary, in declaration order.
    fn entries(&self) -> Vec<Entry>;
}

/// Render the summary in single-line form: `Params(a=1, b="x", sub=Sub(c=2))`.
pub fn render_line(summary: &impl Summary) -> String {
    format!(
        "{name}({entries})",
        name = summary.type_name(),
        entries = render_entries_line(&summary.entries())
    )
}

fn render_entries_line(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| match entry {
            Entry::Value { name, value } => format!("{name}={value}"),
            Entry::Group {
                name,
                type_name,
                entries,
            } => format!(
                "{name}={type_name}({entries})",
                entries = render_entries_line(entries)
            ),
        })
        .collect::<Vec<String>>()
        .join(", ")
}

/// Render the summary as two-column `arg`/`value` tables.
///
/// The root parameters form one table, and each sub-command group forms another.
/// Sub-command fields are keyed `GROUP__FIELD`.
/// The tables merge side-by-side with a fixed gap.
pub fn render_table(summary: &impl Summary) -> String {
    let mut order: Vec<Option<String>> = Vec::default();
    let mut groups: HashMap<Option<String>, Vec<(String, String)>> = HashMap::default();
    flatten_entries(&summary.entries(), None, &mut order, &mut groups);

    let tables: Vec<Vec<String>> = order
        .into_iter()
        .map(|prefix| {
            let rows = groups
                .remove(&prefix)
                .expect("internal error - must have been set");
            render_single_table(&rows)
        })
        .collect();
    merge_tables(tables)
}

fn flatten_entries(
    entries: &[Entry],
    prefix: Option<&str>,
    order: &mut Vec<Option<String>>,
    groups: &mut HashMap<Option<String>, Vec<(String, String)>>,
) {
    for entry in entries {
        match entry {
            Entry::Value { name, value } => {
                let key = match prefix {
                    Some(prefix) => format!("{prefix}__{name}"),
                    None => name.clone(),
                };
                let group = prefix.map(str::to_string);

                if !groups.contains_key(&group) {
                    order.push(group.clone());
                }

                groups.entry(group).or_default().push((key, value.clone()));
            }
            Entry::Group { name, entries, .. } => {
                let nested = match prefix {
                    Some(prefix) => format!("{prefix}__{name}"),
                    None => name.clone(),
                };
                flatten_entries(entries, Some(&nested), order, groups);
            }
        }
    }
}

fn render_single_table(rows: &[(String, String)]) -> Vec<String> {
    let key_width = rows
        .iter()
        .map(|(key, _)| key.len())
        .chain([KEY_HEADER.len()])
        .max()
        .expect("internal error - must be non-empty");
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .chain([VALUE_HEADER.len()])
        .max()
        .expect("internal error - must be non-empty");

    let mut lines = vec![
        format!("{KEY_HEADER:<key_width$}{COLUMN_GAP}{VALUE_HEADER:<value_width$}"),
        format!(
            "{k}{COLUMN_GAP}{v}",
            k = "-".repeat(key_width),
            v = "-".repeat(value_width)
        ),
    ];

    for (key, value) in rows {
        lines.push(format!(
            "{key:<key_width$}{COLUMN_GAP}{value:<value_width$}"
        ));
    }

    lines
}

fn merge_tables(tables: Vec<Vec<String>>) -> String {
    let height = tables
        .iter()
        .map(|lines| lines.len())
        .max()
        .unwrap_or_default();
    let mut merged = Vec::default();

    for i in 0..height {
        let mut row = String::default();

        for (j, table) in tables.iter().enumerate() {
            match table.get(i) {
                Some(line) => row.push_str(line),
                // Exhausted tables pad out to their own width.
                None => row.push_str(&" ".repeat(table[0].len())),
            }

            if j != tables.len() - 1 {
                row.push_str(TABLE_GAP);
            }
        }

        merged.push(row.trim_end().to_string());
    }

    merged.join("\n")
}

/// Render the summary as an indented tree, one node per field.
///
/// Sub-command groups nest under their discriminator:
/// ```text
/// Params
/// ├── verbose: true
/// └── sub: Sub
///     └── item: "abc"
/// ```
pub fn render_tree(summary: &impl Summary) -> String {
    let mut lines = vec![summary.type_name().to_string()];
    render_tree_entries(&summary.entries(), "", &mut lines);
    lines.join("\n")
}

fn render_tree_entries(entries: &[Entry], prefix: &str, lines: &mut Vec<String>) {
    for (i, entry) in entries.iter().enumerate() {
        let last = i == entries.len() - 1;
        let connector = if last { "└── " } else { "├── " };

        match entry {
            Entry::Value { name, value } => {
                lines.push(format!("{prefix}{connector}{name}: {value}"));
            }
            Entry::Group {
                name,
                type_name,
                entries,
            } => {
                lines.push(format!("{prefix}{connector}{name}: {type_name}"));
                let nested = format!("{prefix}{c}", c = if last { "    " } else { "│   " });
                render_tree_entries(entries, &nested, lines);
            }
        }
    }
}

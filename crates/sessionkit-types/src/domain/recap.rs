use serde::{Deserialize, Serialize};

use crate::basename_or_self;

/// Instructions placed above the grouped prompts
pub const DEFAULT_RECAP_HEADER: &str = "Summarize the following session activity into project-wise one-liners.\n\
Format: **project**: <concise one-liner summary of ALL work done>\n\
Group by project. Be specific about what was done (features, fixes, configs).\n";

/// User prompts from every same-day transcript that maps to one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapGroup {
    pub project: String,
    /// First cwd seen for this project
    pub cwd: String,
    pub user_messages: Vec<String>,
}

/// Project label for a working directory: its final path component
pub fn project_label(cwd: &str) -> String {
    basename_or_self(cwd).to_string()
}

/// Same-day activity across the store, grouped by project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recap {
    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub groups: Vec<RecapGroup>,
}

impl Recap {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            groups: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Merge messages into the group for `cwd`'s project, creating it on first sight.
    pub fn absorb(&mut self, cwd: &str, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        let project = project_label(cwd);
        match self.groups.iter_mut().find(|g| g.project == project) {
            Some(group) => group.user_messages.extend(messages),
            None => self.groups.push(RecapGroup {
                project,
                cwd: cwd.to_string(),
                user_messages: messages,
            }),
        }
    }

    /// Render the summarization payload with the stock instructions.
    pub fn to_prompt(&self) -> String {
        self.to_prompt_with_header(DEFAULT_RECAP_HEADER)
    }

    pub fn to_prompt_with_header(&self, header: &str) -> String {
        let mut out = String::new();
        out.push_str(header);
        if !header.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');

        for group in &self.groups {
            out.push_str(&format!("## {} ({})\n", group.project, group.cwd));
            out.push_str("User prompts:\n");
            for msg in &group.user_messages {
                out.push_str(&format!("- {}\n", msg));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_merges_by_basename() {
        let mut recap = Recap::new("2026-02-26");
        recap.absorb("/home/a/proj", vec!["first prompt".to_string()]);
        recap.absorb("/home/b/other/proj", vec!["second prompt".to_string()]);

        assert_eq!(recap.groups.len(), 1);
        assert_eq!(recap.groups[0].project, "proj");
        assert_eq!(recap.groups[0].cwd, "/home/a/proj");
        assert_eq!(
            recap.groups[0].user_messages,
            vec!["first prompt", "second prompt"]
        );
    }

    #[test]
    fn test_absorb_ignores_empty_messages() {
        let mut recap = Recap::new("2026-02-26");
        recap.absorb("/home/a/proj", Vec::new());
        assert!(recap.is_empty());
    }

    #[test]
    fn test_project_label_degenerate_paths() {
        assert_eq!(project_label("/home/a/proj/"), "proj");
        assert_eq!(project_label("proj"), "proj");
        assert_eq!(project_label("/"), "/");
        assert_eq!(project_label(""), "");
    }
}

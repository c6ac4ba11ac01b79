use regex::Regex;
use std::sync::LazyLock;

use crate::ports::Prompt;

/// Git invocations that rewrite history or throw away work
static DESTRUCTIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bgit\s+commit\b",
        r"\bgit\s+commit\s+--amend\b",
        r"\bgit\s+rebase\b",
        r"\bgit\s+reset\b",
        r"\bgit\s+push\s+--force\b",
        r"\bgit\s+push\s+--force-with-lease\b",
        r"\bgit\s+checkout\s+--\s",
        r"\bgit\s+restore\b",
        r"\bgit\s+clean\b",
        r"\bgit\s+branch\s+-D\b",
        r"\bgit\s+stash\s+drop\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub const DENIED_REASON: &str = "Git operation denied by user.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    Allow,
    Block { reason: String },
}

pub fn is_destructive(command: &str) -> bool {
    DESTRUCTIVE_PATTERNS.iter().any(|p| p.is_match(command))
}

/// Ask the operator before a destructive git command runs.
pub fn review_command(command: &str, prompt: &mut dyn Prompt) -> GuardVerdict {
    if !is_destructive(command) {
        return GuardVerdict::Allow;
    }

    if prompt.confirm("Git operation requires approval", command) {
        GuardVerdict::Allow
    } else {
        GuardVerdict::Block {
            reason: DENIED_REASON.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_commands() {
        for cmd in [
            "git commit -m 'wip'",
            "git commit --amend --no-edit",
            "git rebase -i HEAD~3",
            "git reset --hard origin/main",
            "git push --force origin main",
            "git push --force-with-lease",
            "git checkout -- src/lib.rs",
            "git restore .",
            "git clean -fdx",
            "git branch -D feature",
            "git stash drop",
            "cd repo && git  reset HEAD~1",
        ] {
            assert!(is_destructive(cmd), "{} should be guarded", cmd);
        }
    }

    #[test]
    fn test_harmless_commands() {
        for cmd in [
            "git status",
            "git log --oneline",
            "git push origin main",
            "git checkout main",
            "git branch -d merged",
            "git stash list",
            "echo commit",
        ] {
            assert!(!is_destructive(cmd), "{} should pass", cmd);
        }
    }
}

//! Parsing of git command output - pure functions
//!
//! No I/O happens here, so every parser is unit tested against captured
//! output.

use crate::types::RepositoryStatus;
use regex::Regex;
use std::sync::LazyLock;

/// Branch reported when HEAD is detached
pub const DETACHED_HEAD: &str = "HEAD";

static BRANCH_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^## (?:No commits yet on |Initial commit on )?(?P<branch>.+?)(?:\.\.\.(?P<upstream>\S+))?(?: \[(?P<tracking>[^\]]*)\])?$",
    )
    .expect("branch header regex is valid")
});

static AHEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ahead (\d+)").expect("ahead regex is valid"));

static BEHIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"behind (\d+)").expect("behind regex is valid"));

/// Two-letter porcelain codes for unmerged paths
const UNMERGED_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Parse `git status --porcelain=v1 --branch` output
pub fn parse_porcelain_status(output: &str) -> RepositoryStatus {
    let mut status = RepositoryStatus {
        current_branch: DETACHED_HEAD.to_string(),
        is_clean: true,
        ..RepositoryStatus::default()
    };

    for line in output.lines() {
        if line.starts_with("## ") {
            parse_branch_header(line, &mut status);
            continue;
        }
        if line.len() < 3 {
            continue;
        }

        status.is_clean = false;
        let (code, path) = line.split_at(2);
        if UNMERGED_CODES.contains(&code) {
            status.conflicted.push(unquote(path.trim_start()).to_string());
        }
    }

    status
}

fn parse_branch_header(line: &str, status: &mut RepositoryStatus) {
    let Some(caps) = BRANCH_HEADER.captures(line) else {
        return;
    };

    let branch = &caps["branch"];
    status.current_branch = if branch.starts_with("HEAD (") {
        DETACHED_HEAD.to_string()
    } else {
        branch.to_string()
    };

    if let Some(tracking) = caps.name("tracking") {
        status.ahead = capture_count(&AHEAD, tracking.as_str());
        status.behind = capture_count(&BEHIND, tracking.as_str());
    }
}

fn capture_count(re: &Regex, text: &str) -> u32 {
    re.captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0)
}

fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path)
}

/// Check a ref listing (`git for-each-ref --format=%(refname)`) for a branch
///
/// Matches `refs/heads/<name>` or `refs/remotes/<remote>/<name>` exactly.
pub fn branch_in_refs(refs: &str, name: &str, remote: &str) -> bool {
    let local = format!("refs/heads/{name}");
    let remote_ref = format!("refs/remotes/{remote}/{name}");
    refs.lines()
        .map(str::trim)
        .any(|r| r == local || r == remote_ref)
}

/// Whether a failed merge's output describes a conflict
///
/// Plain case-insensitive substring match on "conflict".
pub fn is_conflict_message(message: &str) -> bool {
    message.to_lowercase().contains("conflict")
}

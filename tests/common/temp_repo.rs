//! Real git repositories in temp directories
//!
//! Each `TempGitRepo` is a working clone wired to a bare `origin` living in
//! the same temp directory, so push and fetch never leave the sandbox.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir`, panicking with its stderr on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub struct TempGitRepo {
    dir: TempDir,
    /// Bare repository acting as `origin`
    pub origin: PathBuf,
    /// Working clone the CLI runs in
    pub work: PathBuf,
}

impl TempGitRepo {
    /// Working repo on `main` with one commit, pushed to origin
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let origin = dir.path().join("origin.git");
        let work = dir.path().join("work");
        fs::create_dir_all(&origin).unwrap();
        fs::create_dir_all(&work).unwrap();

        git(&origin, &["init", "--bare", "--quiet"]);
        git(&origin, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        git(&work, &["init", "--quiet"]);
        git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(&work, &["config", "user.name", "Test User"]);
        git(&work, &["config", "user.email", "test@example.com"]);
        git(&work, &["config", "commit.gpgsign", "false"]);
        git(
            &work,
            &["remote", "add", "origin", origin.to_str().expect("utf-8 temp path")],
        );

        let repo = Self { dir, origin, work };
        repo.commit_file("README.md", "hello\n", "Initial commit");
        git(&repo.work, &["push", "--quiet", "-u", "origin", "main"]);
        repo
    }

    /// Directory holding both repositories
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.work.join(name), contents).expect("write file");
    }

    pub fn commit_file(&self, name: &str, contents: &str, message: &str) {
        self.write_file(name, contents);
        git(&self.work, &["add", name]);
        git(&self.work, &["commit", "--quiet", "-m", message]);
    }

    pub fn checkout_new(&self, branch: &str) {
        git(&self.work, &["checkout", "--quiet", "-b", branch]);
    }

    pub fn checkout(&self, branch: &str) {
        git(&self.work, &["checkout", "--quiet", branch]);
    }

    pub fn current_branch(&self) -> String {
        git(&self.work, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub fn head_of(&self, branch: &str) -> String {
        git(&self.work, &["rev-parse", branch])
    }

    /// Commit that `branch` points to in the bare origin
    pub fn origin_head_of(&self, branch: &str) -> String {
        git(&self.origin, &["rev-parse", branch])
    }

    pub fn delete_local_branch(&self, branch: &str) {
        git(&self.work, &["branch", "--quiet", "-D", branch]);
    }

    pub fn status_porcelain(&self) -> String {
        git(&self.work, &["status", "--porcelain"])
    }
}

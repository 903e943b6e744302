//! Script statements and the serializer.

use std::fmt;
use std::path::Path;

/// A single statement of a generated shell script.
///
/// Targets of removal and move statements are kept as text because they may
/// carry shell globs (`case1*`, `baseCase/*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `# text`
    Comment(String),
    /// An empty line
    Blank,
    /// `<script> &`, run a script in the background
    InvokeBackground(String),
    /// `rm -rf <target>`
    RemoveTree(String),
    /// `rm <file> <file> ...`
    RemoveFiles(Vec<String>),
    /// `mv <from> <to>`
    Move { from: String, to: String },
    /// Interactive `[y/N]` loop that removes `target` only on a yes answer
    ConfirmRemove(String),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) => write!(f, "# {}", text),
            Self::Blank => Ok(()),
            Self::InvokeBackground(script) => write!(f, "{} &", script),
            Self::RemoveTree(target) => write!(f, "rm -rf {}", target),
            Self::RemoveFiles(files) => write!(f, "rm {}", files.join(" ")),
            Self::Move { from, to } => write!(f, "mv {} {}", from, to),
            Self::ConfirmRemove(target) => {
                writeln!(f, "while true; do")?;
                writeln!(
                    f,
                    "    read -p \"Delete {t} directory? All changes in {t} will be lost. [y/N] \" yn",
                    t = target
                )?;
                writeln!(f, "    case $yn in")?;
                writeln!(f, "        [Yy]* ) rm -rf {}; break;;", target)?;
                writeln!(f, "        [Nn]* ) exit;;")?;
                writeln!(f, "        * ) exit;;")?;
                writeln!(f, "    esac")?;
                write!(f, "done")
            }
        }
    }
}

/// An ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub statements: Vec<Statement>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stmt: Statement) -> &mut Self {
        self.statements.push(stmt);
        self
    }

    /// Render the script; every statement ends with a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Statements of one kind, for inspection in callers and tests.
    pub fn count(&self, pred: impl Fn(&Statement) -> bool) -> usize {
        self.statements.iter().filter(|&s| pred(s)).count()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// `base/name` as shell text.
pub fn join(base: &Path, name: &str) -> String {
    base.join(name).display().to_string()
}

/// `base` with exactly one trailing separator. An empty base stays empty,
/// it never becomes the filesystem root.
pub fn with_trailing_slash(base: &Path) -> String {
    let text = base.display().to_string();
    if text.is_empty() || text.ends_with('/') {
        text
    } else {
        format!("{}/", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_statements() {
        assert_eq!(Statement::Comment("hi".into()).to_string(), "# hi");
        assert_eq!(Statement::Blank.to_string(), "");
        assert_eq!(
            Statement::InvokeBackground("cases/a/Allrun".into()).to_string(),
            "cases/a/Allrun &"
        );
        assert_eq!(Statement::RemoveTree("x/y*".into()).to_string(), "rm -rf x/y*");
        assert_eq!(
            Statement::RemoveFiles(vec!["a".into(), "b".into()]).to_string(),
            "rm a b"
        );
        assert_eq!(
            Statement::Move {
                from: "s/*".into(),
                to: "d/".into()
            }
            .to_string(),
            "mv s/* d/"
        );
    }

    #[test]
    fn test_confirm_block_defaults_to_abort() {
        let text = Statement::ConfirmRemove("study".into()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"while true; do"));
        assert_eq!(lines.last(), Some(&"done"));
        assert!(text.contains("[y/N]"));
        assert!(text.contains("[Yy]* ) rm -rf study; break;;"));
        assert!(text.contains("* ) exit;;"));
    }

    #[test]
    fn test_script_render_terminates_lines() {
        let mut script = Script::new();
        script
            .push(Statement::Comment("header".into()))
            .push(Statement::Blank)
            .push(Statement::InvokeBackground("a/Allrun".into()));
        assert_eq!(script.render(), "# header\n\na/Allrun &\n");
    }

    #[test]
    fn test_empty_script_renders_nothing() {
        assert_eq!(Script::new().render(), "");
    }

    #[test]
    fn test_path_helpers() {
        assert_eq!(join(Path::new("study"), "case1*"), "study/case1*");
        assert_eq!(join(Path::new("study/"), "baseCase"), "study/baseCase");
        assert_eq!(with_trailing_slash(Path::new("study")), "study/");
        assert_eq!(with_trailing_slash(Path::new("study/")), "study/");
        assert_eq!(with_trailing_slash(Path::new("")), "");
    }
}

use serde::Deserialize;
use std::collections::BTreeMap;
use crate::error::ParseError;
use super::task::{Args, Task, TaskType};

/// Task as it appears in the document, before its type is checked.
#[derive(Debug, Deserialize)]
struct RawTask {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(rename = "abortOnFail", default)]
    abort_on_fail: bool,
    /// Scalars keep their source text (`1.10` stays "1.10"); null reads as "".
    #[serde(default)]
    args: Option<BTreeMap<String, Option<String>>>,
}

fn into_args(raw: Option<BTreeMap<String, Option<String>>>) -> Args {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect()
}

/// Parses a task document. The batch is rejected as a whole if any task
/// carries an unknown type.
pub fn parse_tasks(input: &[u8]) -> Result<Vec<Task>, ParseError> {
    // serde_yaml reports end-of-stream for input with no document at all.
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let raw: Option<Vec<RawTask>> = serde_yaml::from_slice(input)?;

    raw.unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let kind = TaskType::from_name(&raw.kind)
                .ok_or_else(|| ParseError::InvalidType { index, found: raw.kind.clone() })?;
            Ok(Task {
                name: raw.name,
                kind,
                abort_on_fail: raw.abort_on_fail,
                args: into_args(raw.args),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
- name: Create root directory
  type: create_dir
  abortOnFail: true
  args:
    path: /tmp/project
- name: Create VERSION file
  type: create_file
  args:
    path: /tmp/project/VERSION
- name: Set VERSION
  type: put_content
  args:
    path: /tmp/project/VERSION
    content: 1.0.0
    append: false # overwrite the file
- name: Clean up
  type: rm_dir
  abortOnFail: true
  args:
    path: /tmp/project
    recursive: true
"#;

    #[test]
    fn test_parse_preserves_order() {
        let tasks = parse_tasks(DOC.as_bytes()).unwrap();
        let kinds: Vec<TaskType> = tasks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TaskType::CreateDir, TaskType::CreateFile, TaskType::PutContent, TaskType::RmDir]
        );
        assert_eq!(tasks[0].name, "Create root directory");
        assert!(tasks[0].abort_on_fail);
        assert!(!tasks[1].abort_on_fail);
    }

    #[test]
    fn test_parse_stringifies_scalars() {
        let tasks = parse_tasks(DOC.as_bytes()).unwrap();
        assert_eq!(tasks[2].args["content"], "1.0.0");
        assert_eq!(tasks[2].args["append"], "false");
        assert_eq!(tasks[3].args["recursive"], "true");

        let tasks = parse_tasks(b"- type: put_content\n  args: {path: n, content: 42, append: ~}\n").unwrap();
        assert_eq!(tasks[0].args["content"], "42");
        assert_eq!(tasks[0].args["append"], "");
    }

    #[test]
    fn test_parse_keeps_scalar_text() {
        let doc = b"- type: put_content\n  args: {path: v, content: 1.10, hex: 0x1F, exp: 1e3, flag: false}\n";
        let args = &parse_tasks(doc).unwrap()[0].args;
        assert_eq!(args["content"], "1.10");
        assert_eq!(args["hex"], "0x1F");
        assert_eq!(args["exp"], "1e3");
        assert_eq!(args["flag"], "false");
    }

    #[test]
    fn test_parse_defaults() {
        let tasks = parse_tasks(b"- type: create_file\n").unwrap();
        assert_eq!(tasks[0].name, "");
        assert!(!tasks[0].abort_on_fail);
        assert!(tasks[0].args.is_empty());

        assert!(parse_tasks(b"").unwrap().is_empty());
        assert!(parse_tasks(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_round_trip() {
        let tasks = parse_tasks(DOC.as_bytes()).unwrap();
        let yaml = serde_yaml::to_string(&tasks).unwrap();
        assert_eq!(parse_tasks(yaml.as_bytes()).unwrap(), tasks);
    }

    #[test]
    fn test_invalid_type_anywhere_rejects_batch() {
        for position in 0..3 {
            let mut doc = String::new();
            for i in 0..3 {
                let kind = if i == position { "chmod" } else { "create_dir" };
                doc.push_str(&format!("- type: {}\n  args: {{path: d{}}}\n", kind, i));
            }
            match parse_tasks(doc.as_bytes()) {
                Err(ParseError::InvalidType { index, found }) => {
                    assert_eq!(index, position);
                    assert_eq!(found, "chmod");
                }
                other => panic!("expected invalid type, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_type_is_invalid() {
        let err = parse_tasks(b"- name: nothing\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidType { index: 0, .. }));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(parse_tasks(b"- type: [create_dir"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_tasks(b"type: create_dir"), Err(ParseError::Syntax(_))));
        assert!(matches!(
            parse_tasks(b"- type: create_dir\n  args: {path: [a, b]}\n"),
            Err(ParseError::Syntax(_))
        ));
    }
}

// json object documents on disk
//
// `load` never fails on content: a missing file, bad json, or json that is not an object are all
// reported through `Loaded` so callers can decide how loudly to fall back to an empty object.
// only i/o failures other than "not found" are errors.

use {
  serde::Serialize,
  serde_json::{ser::PrettyFormatter, Serializer, Value},
  std::path::Path,
  thiserror,
  crate::{fs, merge::Object},
};

const INDENT: &[u8] = b"    ";

#[derive(thiserror::Error, Debug)]
pub enum Error {

  #[error(transparent)]
  Fs(#[from] fs::Error),

  #[error("Failed to serialize json: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Loaded {
  Object(Object),
  Missing,
  Malformed(String),
}

impl Loaded {

  pub fn parse(data: &[u8]) -> Self {
    // classify raw file content

    match serde_json::from_slice::<Value>(data) {
      Ok(Value::Object(map)) => Loaded::Object(map),
      Ok(other) => Loaded::Malformed(format!("expected a json object, found {}", kind(&other))),
      Err(err) => Loaded::Malformed(err.to_string()),
    }
  }

  pub fn is_object(&self) -> bool {
    matches!(self, Loaded::Object(_))
  }

  pub fn into_object(self) -> Object {
    // the loaded object, or an empty one

    match self {
      Loaded::Object(map) => map,
      Loaded::Missing | Loaded::Malformed(_) => Object::new(),
    }
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Loaded, fs::Error> {
  Ok(match fs::load(path)? {
    Some(data) => Loaded::parse(&data),
    None => Loaded::Missing,
  })
}

pub fn render(object: &Object) -> Result<Vec<u8>> {
  // utf-8 pretty json with four space indent, non-ascii left as is

  let mut buf = Vec::new();
  let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
  object.serialize(&mut ser)?;
  buf.push(b'\n');
  Ok(buf)
}

pub fn save<P: AsRef<Path>>(path: P, object: &Object) -> Result<()> {
  // render `object` to `path`, creating parent directories

  let data = render(object)?;
  fs::mkdir_parent(&path)?;
  Ok(fs::dump(&path, data)?)
}

#[cfg(test)]
mod tests {
  use {
    serde_json::json,
    tempdir::TempDir,
    super::*,
  };

  fn render_str(object: &Object) -> String {
    String::from_utf8(render(object).unwrap()).unwrap()
  }

  fn object(value: Value) -> Object {
    match value {
      Value::Object(map) => map,
      _ => panic!("not an object: {}", value),
    }
  }

  #[test]
  fn parse_object() {
    assert_eq!(Loaded::parse(br#"{"a": 1}"#), Loaded::Object(object(json!({"a": 1}))));
  }

  #[test]
  fn parse_invalid_json() {
    assert!(matches!(Loaded::parse(b"{\"a\": "), Loaded::Malformed(_)));
    assert!(matches!(Loaded::parse(b""), Loaded::Malformed(_)));
    assert!(matches!(Loaded::parse(b"\xff\xfe"), Loaded::Malformed(_)));
  }

  #[test]
  fn parse_non_object() {
    match Loaded::parse(b"[1, 2]") {
      Loaded::Malformed(reason) => assert!(reason.contains("an array"), "{}", reason),
      other => panic!("unexpected: {:?}", other),
    }
    assert!(!Loaded::parse(b"null").is_object());
  }

  #[test]
  fn fallbacks_are_empty() {
    assert!(Loaded::Missing.into_object().is_empty());
    assert!(Loaded::Malformed("bad".into()).into_object().is_empty());
  }

  #[test]
  fn render_uses_four_spaces() {
    let text = render_str(&object(json!({"a": {"b": true}})));
    assert_eq!(text, "{\n    \"a\": {\n        \"b\": true\n    }\n}\n");
  }

  #[test]
  fn render_keeps_non_ascii() {
    let text = render_str(&object(json!({"greeting": "Привет ✓"})));
    assert!(text.contains("Привет ✓"), "{}", text);
    assert!(!text.contains("\\u"));
  }

  #[test]
  fn render_empty() {
    assert_eq!(render(&Object::new()).unwrap(), b"{}\n");
  }

  #[test]
  fn big_numbers_keep_their_digits() {
    let text = br#"{"id": 123456789012345678901234567890, "x": 18446744073709551616, "f": 1.10}"#;
    let text = render_str(&Loaded::parse(text).into_object());
    assert!(text.contains("\"id\": 123456789012345678901234567890,"), "{}", text);
    assert!(text.contains("\"x\": 18446744073709551616,"), "{}", text);
    assert!(text.contains("\"f\": 1.10\n"), "{}", text);
  }

  #[test]
  fn save_then_load() {
    let dir = TempDir::new("document").unwrap();
    let path = dir.path().join(".vscode/settings.json");
    assert_eq!(load(&path).unwrap(), Loaded::Missing);
    let settings = object(json!({"debug.test": true, "n": 1.5}));
    save(&path, &settings).unwrap();
    assert_eq!(load(&path).unwrap(), Loaded::Object(settings));
  }
}

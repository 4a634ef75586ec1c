use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Serializer, Value};

use crate::Result;
use crate::error::MergeError;
use crate::format::ScriptNumbers;

/// Reads the whole file at `path` and parses it as a JSON value.
///
/// Nesting depth is not capped, any well-formed document is accepted.
pub fn load_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut deserializer = serde_json::Deserializer::from_str(&contents);
    deserializer.disable_recursion_limit();
    let document = Value::deserialize(&mut deserializer)
        .and_then(|document| {
            deserializer.end()?;
            Ok(document)
        })
        .map_err(|source| MergeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("Loaded {} ({} bytes)", path.display(), contents.len());
    Ok(document)
}

/// Sets `field` on the `base` object to `secondary` and returns the result.
///
/// This is a single top-level assignment: an existing value under `field` is
/// replaced as a whole, never merged into. Every other key of `base` is kept
/// as is, in its original position.
pub fn attach(base: Value, field: &str, secondary: Value) -> Result<Value> {
    match base {
        Value::Object(mut map) => {
            map.insert(field.to_string(), secondary);
            Ok(Value::Object(map))
        }
        other => Err(MergeError::TypeMismatch {
            kind: json_kind(&other),
        }),
    }
}

/// Serializes `document` compactly, or with two-space indentation when
/// `pretty` is set. Floats are written as `JSON.stringify` writes them.
pub fn render(document: &Value, pretty: bool) -> Result<String> {
    let mut buffer = Vec::new();
    let written = if pretty {
        document.serialize(&mut Serializer::with_formatter(
            &mut buffer,
            ScriptNumbers::pretty(),
        ))
    } else {
        document.serialize(&mut Serializer::with_formatter(
            &mut buffer,
            ScriptNumbers::compact(),
        ))
    };
    written.map_err(MergeError::Serialize)?;

    String::from_utf8(buffer)
        .map_err(|e| MergeError::Serialize(serde::ser::Error::custom(e)))
}

/// Serializes `document` and writes it to `path`, replacing any existing file.
///
/// The write is not atomic.
pub fn write_document(path: &Path, document: &Value, pretty: bool) -> Result<()> {
    let contents = render(document, pretty)?;
    fs::write(path, contents).map_err(|source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

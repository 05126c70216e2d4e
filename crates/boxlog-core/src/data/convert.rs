use super::render::print_tree;
use super::value::{Mapping, Value};
use crate::{Error, Result};
use serde::Serialize;

/// Convert any serializable value into a [`Mapping`], field order preserved.
///
/// Fails when serialization fails or when the value is not a string-keyed map
/// (structs, maps); nothing partial is returned.
pub fn to_mapping<T: Serialize + ?Sized>(data: &T) -> Result<Mapping> {
    match Value::from(serde_json::to_value(data)?) {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(Error::NotAMapping(other.kind())),
    }
}

/// Print a serializable value as a tree. Conversion errors are returned before
/// anything is written.
pub fn print_struct<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    let mapping = to_mapping(data)?;
    print_tree(&mapping, "");
    Ok(())
}

/// Pretty JSON using `indent` spaces per level.
pub fn format_json<T: Serialize + ?Sized>(data: &T, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|err| Error::Io(std::io::Error::other(err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Account {
        name: String,
        #[serde(rename = "userAge")]
        age: u32,
        active: bool,
        roles: Vec<String>,
        #[serde(skip)]
        #[allow(dead_code)]
        secret: String,
    }

    fn account() -> Account {
        Account {
            name: "John".to_string(),
            age: 30,
            active: true,
            roles: vec!["admin".to_string()],
            secret: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_to_mapping_follows_serde_attributes() {
        let mapping = to_mapping(&account()).unwrap();
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["name", "userAge", "active", "roles"]);
        assert_eq!(mapping.get("userAge"), Some(&Value::from(30)));
    }

    #[test]
    fn test_to_mapping_rejects_non_maps() {
        let err = to_mapping(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::NotAMapping("sequence")));
        let err = to_mapping(&42).unwrap_err();
        assert!(matches!(err, Error::NotAMapping("number")));
    }

    #[test]
    fn test_to_mapping_surfaces_serialize_errors() {
        let mut bad: BTreeMap<Vec<u8>, u8> = BTreeMap::new();
        bad.insert(vec![1], 1);
        let err = to_mapping(&bad).unwrap_err();
        assert!(matches!(err, Error::Serialize(_)));
    }

    #[test]
    fn test_print_struct_fails_without_output_on_bad_input() {
        assert!(print_struct(&"just a string").is_err());
        assert!(print_struct(&account()).is_ok());
    }

    #[test]
    fn test_format_json_indent() {
        let mapping: BTreeMap<&str, Vec<u8>> = BTreeMap::from([("a", vec![1])]);
        assert_eq!(format_json(&mapping, 4).unwrap(), "{\n    \"a\": [\n        1\n    ]\n}");
        assert_eq!(format_json(&mapping, 0).unwrap(), "{\n\"a\": [\n1\n]\n}");
    }
}

//! Record Store Tests
//!
//! ## Test Scopes
//! - **Wire format**: `rollNumber` naming and numeric/text roll numbers.
//! - **Loading**: happy path, order preservation, and the two fatal failure modes.

#[cfg(test)]
mod tests {
    use crate::records::store::{RecordStore, StoreError};
    use crate::records::types::{RollNumber, StudentRecord};
    use std::io::Write;

    fn write_data(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_record_uses_camel_case_roll_number() {
        let record = StudentRecord::new("Alice Smith", "5A", RollNumber::Number(1));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Alice Smith");
        assert_eq!(json["class"], "5A");
        assert_eq!(json["rollNumber"], 1);
        assert!(json.get("roll_number").is_none());
    }

    #[test]
    fn test_roll_number_accepts_number_and_text() {
        let numeric: StudentRecord =
            serde_json::from_str(r#"{"name":"A","class":"1","rollNumber":42}"#).unwrap();
        let text: StudentRecord =
            serde_json::from_str(r#"{"name":"B","class":"1","rollNumber":"12B"}"#).unwrap();

        assert_eq!(numeric.roll_number, RollNumber::Number(42));
        assert_eq!(text.roll_number, RollNumber::Text("12B".to_string()));
    }

    #[test]
    fn test_load_accepts_negative_roll_number() {
        let file = write_data(r#"[{"name":"Dana Cole","class":"3C","rollNumber":-3}]"#);

        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(store.all()[0].roll_number, RollNumber::Number(-3));
    }

    #[test]
    fn test_roll_number_display() {
        assert_eq!(RollNumber::Number(7).to_string(), "7");
        assert_eq!(RollNumber::Text("7C".to_string()).to_string(), "7C");
    }

    // ============================================================
    // LOADING TESTS
    // ============================================================

    #[test]
    fn test_load_preserves_file_order() {
        let file = write_data(
            r#"[
                {"name":"Carol Jones","class":"6A","rollNumber":3},
                {"name":"Alice Smith","class":"5A","rollNumber":1},
                {"name":"Bob Alicewood","class":"5B","rollNumber":2}
            ]"#,
        );

        let store = RecordStore::load(file.path()).unwrap();
        let names: Vec<&str> = store.all().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(store.len(), 3);
        assert_eq!(names, vec!["Carol Jones", "Alice Smith", "Bob Alicewood"]);
    }

    #[test]
    fn test_load_empty_array() {
        let file = write_data("[]");
        let store = RecordStore::load(file.path()).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = RecordStore::load(&missing).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let file = write_data(r#"[{"name":"Alice""#);

        let err = RecordStore::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_load_wrong_shape_is_parse_error() {
        // Missing `class`
        let file = write_data(r#"[{"name":"Alice","rollNumber":1}]"#);

        let err = RecordStore::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_from_records_keeps_order() {
        let store = RecordStore::from_records(vec![
            StudentRecord::new("Zed", "1", RollNumber::Number(9)),
            StudentRecord::new("Amy", "1", RollNumber::Number(1)),
        ]);

        assert_eq!(store.all()[0].name, "Zed");
        assert_eq!(store.all()[1].name, "Amy");
    }
}

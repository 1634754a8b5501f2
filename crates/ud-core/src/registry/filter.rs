use super::FileRecord;

/// Display filter over the registry: type substring AND max size.
///
/// 过滤规则：类型子串匹配 + 最大体积，两者取与。
///
/// Rules:
/// - empty type fragment matches everything
/// - mime match is a case-sensitive substring test
/// - a missing size bound disables the size constraint entirely
/// - input order is preserved, nothing is deduplicated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    pub type_contains: String,
    pub max_size_bytes: Option<u64>,
}

impl FileFilter {
    pub fn new(type_contains: impl Into<String>, max_size_bytes: Option<u64>) -> Self {
        Self {
            type_contains: type_contains.into(),
            max_size_bytes,
        }
    }

    /// Build a filter from the raw UI inputs.
    ///
    /// The size input arrives in megabytes as free text. Anything that does
    /// not parse to a positive number disables the size constraint; it must
    /// never turn into "exclude everything".
    pub fn from_raw(type_contains: &str, max_size_mb_raw: &str) -> Self {
        let max_size_bytes = match max_size_mb_raw.trim().parse::<f64>() {
            Ok(mb) if mb > 0.0 && mb.is_finite() => Some((mb * BYTES_PER_MB) as u64),
            _ => None,
        };
        Self {
            type_contains: type_contains.to_string(),
            max_size_bytes,
        }
    }

    fn matches_type(&self, record: &FileRecord) -> bool {
        // 空串视为不限类型
        self.type_contains.is_empty() || record.mime_type.contains(&self.type_contains)
    }

    fn matches_size(&self, record: &FileRecord) -> bool {
        match self.max_size_bytes {
            Some(max) => record.size_bytes <= max,
            None => true,
        }
    }

    pub fn matches(&self, record: &FileRecord) -> bool {
        self.matches_type(record) && self.matches_size(record)
    }

    /// Compute the display subset. A view over the input, not a mutation.
    pub fn apply<'a>(&self, records: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MimeType;
    use bytes::Bytes;

    fn record(name: &str, mime: &str, size: u64) -> FileRecord {
        FileRecord::with_declared_size(
            name,
            MimeType(mime.to_string()),
            size,
            Bytes::from_static(b""),
        )
    }

    fn names(records: &[&FileRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn filter_with_no_constraints_is_the_identity() {
        let records = vec![
            record("a.png", "image/png", 2_000_000),
            record("b.txt", "text/plain", 500),
        ];
        let filter = FileFilter::new("", None);
        let out = filter.apply(&records);
        assert_eq!(out.len(), 2);
        assert_eq!(names(&out), vec!["a.png", "b.txt"]);
    }

    #[test]
    fn filter_combines_type_and_size_with_logical_and() {
        let records = vec![
            record("small.png", "image/png", 1_000),
            record("big.png", "image/png", 2_000_000),
            record("small.txt", "text/plain", 500),
        ];
        let filter = FileFilter::new("image", Some(1_048_576));
        assert_eq!(names(&filter.apply(&records)), vec!["small.png"]);
    }

    #[test]
    fn filter_type_match_is_case_sensitive_substring() {
        let records = vec![record("a.png", "image/png", 10)];
        assert_eq!(FileFilter::new("image", None).apply(&records).len(), 1);
        assert_eq!(FileFilter::new("png", None).apply(&records).len(), 1);
        assert_eq!(FileFilter::new("IMAGE", None).apply(&records).len(), 0);
    }

    #[test]
    fn filter_scenario_from_two_record_registry() {
        // registry = [a.png image/png 2_000_000, b.txt text/plain 500]
        let records = vec![
            record("a.png", "image/png", 2_000_000),
            record("b.txt", "text/plain", 500),
        ];

        let out = FileFilter::new("text", Some(1_000_000)).apply(&records);
        assert_eq!(names(&out), vec!["b.txt"]);

        let out = FileFilter::new("", Some(1_000_000)).apply(&records);
        assert_eq!(names(&out), vec!["b.txt"]);

        let out = FileFilter::new("image", None).apply(&records);
        assert_eq!(names(&out), vec!["a.png"]);
    }

    #[test]
    fn filter_from_raw_parses_megabytes_into_bytes() {
        let filter = FileFilter::from_raw("image", "1");
        assert_eq!(filter.max_size_bytes, Some(1_048_576));

        let filter = FileFilter::from_raw("", "0.5");
        assert_eq!(filter.max_size_bytes, Some(524_288));
    }

    #[test]
    fn filter_from_raw_treats_unparsable_size_as_no_constraint() {
        for raw in ["", "  ", "abc", "-1", "0", "NaN", "inf"] {
            let filter = FileFilter::from_raw("", raw);
            assert_eq!(filter.max_size_bytes, None, "raw input {:?}", raw);
        }
    }

    #[test]
    fn filter_preserves_input_order() {
        let records = vec![
            record("c.txt", "text/plain", 3),
            record("a.txt", "text/plain", 1),
            record("b.txt", "text/plain", 2),
        ];
        let out = FileFilter::new("text", None).apply(&records);
        assert_eq!(names(&out), vec!["c.txt", "a.txt", "b.txt"]);
    }
}

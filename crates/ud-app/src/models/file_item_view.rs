use serde::Serialize;
use ud_core::FileRecord;

/// A read-only projection of a FileRecord, optimized for presentation.
///
/// This is NOT a domain entity. `index` is the record's position in the
/// full registry, so per-item commands keep working on a filtered listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileItemView {
    /// Position in the registry, not in the filtered subset
    pub index: usize,

    pub name: String,

    pub mime_type: String,

    pub size_bytes: u64,

    /// Human-readable size, megabytes with two decimals
    pub size_label: String,
}

impl FileItemView {
    pub fn from_record(index: usize, record: &FileRecord) -> Self {
        Self {
            index,
            name: record.name.clone(),
            mime_type: record.mime_type.to_string(),
            size_bytes: record.size_bytes,
            size_label: format_size_mb(record.size_bytes),
        }
    }
}

fn format_size_mb(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use ud_core::MimeType;

    #[test]
    fn view_formats_size_as_megabytes_with_two_decimals() {
        let record = FileRecord::with_declared_size(
            "a.png",
            MimeType::image_png(),
            2_000_000,
            Bytes::new(),
        );
        let view = FileItemView::from_record(3, &record);
        assert_eq!(view.index, 3);
        assert_eq!(view.size_label, "1.91 MB");

        let record =
            FileRecord::with_declared_size("b.bin", MimeType::image_png(), 1_048_576, Bytes::new());
        assert_eq!(FileItemView::from_record(0, &record).size_label, "1.00 MB");
    }

    #[test]
    fn view_carries_name_and_mime_through() {
        let record = FileRecord::new("b.txt", MimeType::text_plain(), Bytes::from_static(b"hi"));
        let view = FileItemView::from_record(0, &record);
        assert_eq!(view.name, "b.txt");
        assert_eq!(view.mime_type, "text/plain");
        assert_eq!(view.size_bytes, 2);
    }
}

//! 原始记录归一化
//!
//! 纯函数，不涉及网络：`RawBookRecord -> Option<Book>`，
//! 再对上游序列做 filter-map。

use super::value_objects::{Book, RawBookRecord, UNKNOWN_AUTHOR, UNTITLED};

/// 封面图片 URL 前缀
pub const COVER_URL_BASE: &str = "https://covers.openlibrary.org/b/id";

/// 根据封面 ID 构造大尺寸封面 URL
///
/// ID 为 0 视为没有封面。
pub fn cover_url(cover_id: i64) -> Option<String> {
    (cover_id != 0).then(|| format!("{}/{}-L.jpg", COVER_URL_BASE, cover_id))
}

/// 归一化单条记录，无法构造封面 URL 时返回 `None`
pub fn normalize_record(raw: RawBookRecord) -> Option<Book> {
    let cover_url = raw.cover_i.and_then(cover_url)?;

    let author = raw
        .author_name
        .and_then(|names| names.into_iter().next())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    Some(Book {
        title: raw.title.unwrap_or_else(|| UNTITLED.to_string()),
        author,
        cover_url,
        open_library_key: raw.key.unwrap_or_default(),
    })
}

/// 归一化整个结果集，保持上游顺序，丢弃无封面记录
pub fn normalize_records<I>(records: I) -> Vec<Book>
where
    I: IntoIterator<Item = RawBookRecord>,
{
    records.into_iter().filter_map(normalize_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, authors: Option<Vec<&str>>, cover: Option<i64>) -> RawBookRecord {
        RawBookRecord {
            author_name: authors.map(|a| a.into_iter().map(String::from).collect()),
            cover_i: cover,
            title: Some(title.to_string()),
            key: Some(format!("/works/{}", title)),
        }
    }

    #[test]
    fn test_cover_url_format() {
        assert_eq!(
            cover_url(258027).as_deref(),
            Some("https://covers.openlibrary.org/b/id/258027-L.jpg")
        );
        assert_eq!(cover_url(0), None);
        assert_eq!(
            cover_url(-5).as_deref(),
            Some("https://covers.openlibrary.org/b/id/-5-L.jpg")
        );
    }

    #[test]
    fn test_negative_cover_id_is_kept() {
        let raw = RawBookRecord {
            cover_i: Some(-5),
            ..Default::default()
        };
        let book = normalize_record(raw).unwrap();
        assert_eq!(book.cover_url, "https://covers.openlibrary.org/b/id/-5-L.jpg");
    }

    #[test]
    fn test_first_author_is_selected() {
        let book = normalize_record(record("A", Some(vec!["First", "Second"]), Some(1))).unwrap();
        assert_eq!(book.author, "First");
    }

    #[test]
    fn test_missing_or_empty_author_uses_sentinel() {
        let missing = normalize_record(record("A", None, Some(1))).unwrap();
        assert_eq!(missing.author, UNKNOWN_AUTHOR);

        let empty = normalize_record(record("B", Some(vec![]), Some(1))).unwrap();
        assert_eq!(empty.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_missing_title_and_key_use_defaults() {
        let raw = RawBookRecord {
            cover_i: Some(9),
            ..Default::default()
        };
        let book = normalize_record(raw).unwrap();
        assert_eq!(book.title, UNTITLED);
        assert_eq!(book.open_library_key, "");
        assert_eq!(book.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_record_without_cover_is_dropped() {
        assert!(normalize_record(record("NoCover", Some(vec!["X"]), None)).is_none());
        assert!(normalize_record(RawBookRecord::default()).is_none());
    }

    #[test]
    fn test_normalize_records_preserves_order_and_filters() {
        let books = normalize_records(vec![
            record("one", None, Some(1)),
            record("two", None, None),
            record("three", None, Some(3)),
            record("four", None, Some(0)),
        ]);

        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "three"]);
        assert!(books.iter().all(|b| b.cover_url.ends_with("-L.jpg")));
    }
}

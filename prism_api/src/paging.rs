//! Paged list support: the [`Pageable`] capability and the cursor that
//! decides which follow-up pages to fetch.

use serde::de::DeserializeOwned;

use crate::types::{ListEntity, ListMetadata, ListResponse};
use crate::Error;

/// A list response the client can extend with further pages.
pub trait Pageable: DeserializeOwned {
    /// False for kinds whose lists are returned as a single page.
    const PAGINATED: bool = true;

    /// Paging metadata of the first page.
    fn metadata(&self) -> &ListMetadata;

    /// Appends the entities of a later page.
    fn append(&mut self, page: Self);

    /// Number of entities accumulated so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ListEntity> Pageable for ListResponse<T> {
    const PAGINATED: bool = T::PAGINATED;

    fn metadata(&self) -> &ListMetadata {
        &self.metadata
    }

    fn append(&mut self, page: Self) {
        self.entities.extend(page.entities);
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}

/// Yields the offsets of the pages still to fetch after the first one.
///
/// `remaining` starts at the number of matches at or past the first page's
/// offset and drops by one page per fetch, the first page included. The
/// cursor stops as soon as it reaches zero: no trailing fetch past the
/// last page and no second request for the first page, so a list of
/// `N * step + r` matches takes exactly `N + 1` requests.
///
/// Offsets and totals come from the server. Negative values are rejected
/// and arithmetic never overflows; an offset that cannot be represented
/// ends the walk.
#[derive(Debug)]
pub(crate) struct PageCursor {
    step: i64,
    offset: Option<i64>,
    remaining: i64,
}

impl PageCursor {
    pub(crate) fn after_first_page(metadata: &ListMetadata, step: i64) -> Result<Self, Error> {
        if metadata.offset < 0 || metadata.total_matches < 0 {
            return Err(Error::InvalidListMetadata {
                offset: metadata.offset,
                total_matches: metadata.total_matches,
            });
        }
        Ok(Self {
            step,
            offset: metadata.offset.checked_add(step),
            remaining: metadata
                .total_matches
                .saturating_sub(metadata.offset)
                .saturating_sub(step),
        })
    }
}

impl Iterator for PageCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.step <= 0 || self.remaining <= 0 {
            return None;
        }
        let offset = self.offset?;
        self.offset = offset.checked_add(self.step);
        self.remaining = self.remaining.saturating_sub(self.step);
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(total_matches: i64, offset: i64, step: i64) -> Vec<i64> {
        let metadata = ListMetadata {
            total_matches,
            offset,
            ..Default::default()
        };
        PageCursor::after_first_page(&metadata, step)
            .unwrap()
            .collect()
    }

    #[test]
    fn single_page_needs_no_follow_up() {
        assert!(offsets(0, 0, 500).is_empty());
        assert!(offsets(1, 0, 500).is_empty());
        assert!(offsets(500, 0, 500).is_empty());
    }

    #[test]
    fn partial_last_page_is_fetched() {
        assert_eq!(offsets(501, 0, 500), vec![500]);
        assert_eq!(offsets(1200, 0, 500), vec![500, 1000]);
    }

    #[test]
    fn exact_multiple_stops_at_last_full_page() {
        assert_eq!(offsets(1000, 0, 500), vec![500]);
        assert_eq!(offsets(1500, 0, 500), vec![500, 1000]);
    }

    #[test]
    fn starts_after_first_page_offset() {
        assert_eq!(offsets(25, 10, 5), vec![15, 20]);
    }

    #[test]
    fn huge_offsets_end_the_walk() {
        assert!(offsets(10, i64::MAX, 500).is_empty());
        assert!(offsets(i64::MAX, i64::MAX - 1, 500).is_empty());
        let step = 1_i64 << 62;
        assert_eq!(offsets(i64::MAX, 0, step), vec![step]);
    }

    #[test]
    fn huge_total_with_small_step_does_not_overflow() {
        let mut cursor = PageCursor::after_first_page(
            &ListMetadata {
                total_matches: i64::MAX,
                offset: 0,
                ..Default::default()
            },
            500,
        )
        .unwrap();
        assert_eq!(cursor.next(), Some(500));
        assert_eq!(cursor.next(), Some(1000));
    }

    #[test]
    fn negative_metadata_is_rejected() {
        let metadata = ListMetadata {
            total_matches: 10,
            offset: -5,
            ..Default::default()
        };
        let err = PageCursor::after_first_page(&metadata, 500).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidListMetadata {
                offset: -5,
                total_matches: 10
            }
        ));
        let metadata = ListMetadata {
            total_matches: -1,
            offset: 0,
            ..Default::default()
        };
        assert!(PageCursor::after_first_page(&metadata, 500).is_err());
    }

    #[test]
    fn zero_step_never_loops() {
        assert!(offsets(100, 0, 0).is_empty());
    }

    #[test]
    fn append_keeps_first_page_first() {
        let mut first: ListResponse<crate::types::Task> = serde_json::from_str(
            r#"{"metadata":{"total_matches":2,"offset":0},"entities":[{"uuid":"a"}]}"#,
        )
        .unwrap();
        let second: ListResponse<crate::types::Task> =
            serde_json::from_str(r#"{"metadata":{"total_matches":2,"offset":1},"entities":[{"uuid":"b"}]}"#)
                .unwrap();
        first.append(second);
        let uuids: Vec<_> = first
            .entities
            .iter()
            .map(|t| t.uuid.as_deref().unwrap())
            .collect();
        assert_eq!(uuids, vec!["a", "b"]);
        assert_eq!(first.metadata().total_matches, 2);
    }
}

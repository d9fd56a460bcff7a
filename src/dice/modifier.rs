use std::collections::BTreeMap;

/// Score to modifier lookup for scores `1..=30`.
///
/// The ends of the range (-5 and 10) cover a single score, every modifier
/// in between covers two consecutive scores.
pub fn modifier_table() -> BTreeMap<u32, i32> {
    let values = (-5..=10).flat_map(|i| {
        let copies = if i == -5 || i == 10 { 1 } else { 2 };
        std::iter::repeat_n(i, copies)
    });
    (1..=30).zip(values).collect()
}

pub fn modifier_for(score: u32) -> Option<i32> {
    modifier_table().get(&score).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_thirty_entries() {
        let table = modifier_table();
        assert_eq!(table.len(), 30);
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_table_endpoints() {
        let table = modifier_table();
        assert_eq!(table[&1], -5);
        assert_eq!(table[&30], 10);
    }

    #[test]
    fn test_inner_values_cover_two_consecutive_scores() {
        let values: Vec<i32> = modifier_table().into_values().collect();
        let inner = &values[1..29];
        for pair in inner.chunks(2) {
            assert_eq!(pair[0], pair[1]);
        }
        assert_eq!(inner.first(), Some(&-4));
        assert_eq!(inner.last(), Some(&9));
    }

    #[test]
    fn test_table_matches_halved_offset_from_ten() {
        for (score, modifier) in modifier_table() {
            assert_eq!(modifier, (score as i32 - 10).div_euclid(2), "score {}", score);
        }
    }

    #[test]
    fn test_modifier_for_out_of_range() {
        assert_eq!(modifier_for(0), None);
        assert_eq!(modifier_for(31), None);
        assert_eq!(modifier_for(10), Some(0));
    }
}

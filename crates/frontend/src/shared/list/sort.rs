//! Column sorting over runtime field values.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Active sort column. With no key the rows keep server order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<&'static str>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same key flips the direction, a new key starts ascending
    pub fn toggle(&mut self, key: &'static str) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn clear(&mut self) {
        *self = SortState::default();
    }

    pub fn is_sorted_by(&self, key: &str) -> bool {
        self.key == Some(key)
    }
}

/// Value of one field as seen by the sorter
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Bool(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Text(_) => 3,
        }
    }

    /// Three-way comparison: missing first, numbers numerically,
    /// text by bytes, `false < true`
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<bool> for SortValue {
    fn from(v: bool) -> Self {
        SortValue::Bool(v)
    }
}

impl From<f64> for SortValue {
    fn from(v: f64) -> Self {
        SortValue::Number(v)
    }
}

impl From<u32> for SortValue {
    fn from(v: u32) -> Self {
        SortValue::Number(v as f64)
    }
}

impl From<u64> for SortValue {
    fn from(v: u64) -> Self {
        SortValue::Number(v as f64)
    }
}

impl From<&str> for SortValue {
    fn from(v: &str) -> Self {
        SortValue::Text(v.to_string())
    }
}

impl From<&String> for SortValue {
    fn from(v: &String) -> Self {
        SortValue::Text(v.clone())
    }
}

impl From<String> for SortValue {
    fn from(v: String) -> Self {
        SortValue::Text(v)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SortValue::Missing)
    }
}

/// Rows that can be ordered by column key
pub trait Sortable {
    /// Value of the column `key`; unknown keys are `Missing`
    fn sort_value(&self, key: &str) -> SortValue;
}

/// Stable sort by one column; equal values keep their input order
/// in both directions.
pub fn sort_items<T: Sortable>(mut items: Vec<T>, key: &str, direction: SortDirection) -> Vec<T> {
    items.sort_by(|a, b| {
        let cmp = a.sort_value(key).compare(&b.sort_value(key));
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
    items
}

pub fn apply_sort<T: Sortable>(items: Vec<T>, sort: &SortState) -> Vec<T> {
    match sort.key {
        Some(key) => sort_items(items, key, sort.direction),
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: Option<f64>,
        active: bool,
    }

    impl Sortable for Row {
        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "name" => self.name.into(),
                "price" => self.price.into(),
                "active" => self.active.into(),
                _ => SortValue::Missing,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "b", price: Some(3.0), active: true },
            Row { name: "a", price: Some(1.0), active: false },
            Row { name: "c", price: Some(2.0), active: true },
        ]
    }

    #[test]
    fn test_numeric_ascending_and_descending() {
        let asc = sort_items(rows(), "price", SortDirection::Ascending);
        assert_eq!(asc.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["a", "c", "b"]);
        let desc = sort_items(rows(), "price", SortDirection::Descending);
        assert_eq!(desc.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let asc = sort_items(rows(), "name", SortDirection::Ascending);
        let mut desc = sort_items(asc.clone(), "name", SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_missing_values_first() {
        let mut items = rows();
        items.push(Row { name: "d", price: None, active: false });
        let asc = sort_items(items, "price", SortDirection::Ascending);
        assert_eq!(asc[0].name, "d");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let asc = sort_items(rows(), "active", SortDirection::Ascending);
        assert_eq!(asc.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["a", "b", "c"]);
        let desc = sort_items(rows(), "active", SortDirection::Descending);
        assert_eq!(desc.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_text_compares_bytes() {
        assert_eq!(SortValue::from("Z").compare(&SortValue::from("a")), Ordering::Less);
    }

    #[test]
    fn test_toggle() {
        let mut sort = SortState::default();
        sort.toggle("name");
        assert_eq!(sort, SortState { key: Some("name"), direction: SortDirection::Ascending });
        sort.toggle("name");
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle("price");
        assert_eq!(sort, SortState { key: Some("price"), direction: SortDirection::Ascending });
    }

    #[test]
    fn test_no_key_keeps_server_order() {
        assert_eq!(apply_sort(rows(), &SortState::default()), rows());
    }
}

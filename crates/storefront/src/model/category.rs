//! Category cards shown in the browsing grid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub product_count: u32,
}

impl Category {
    /// Label for the item-count pill, e.g. `"1,250 items"`.
    pub fn items_label(&self) -> String {
        format!("{} items", group_thousands(self.product_count))
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(count: u32) -> Category {
        Category {
            id: "electronics".into(),
            title: "Electronics".into(),
            description: "Latest gadgets and tech".into(),
            product_count: count,
        }
    }

    #[test]
    fn test_items_label_groups_thousands() {
        assert_eq!(category(1250).items_label(), "1,250 items");
        assert_eq!(category(340).items_label(), "340 items");
        assert_eq!(category(0).items_label(), "0 items");
        assert_eq!(category(1_234_567).items_label(), "1,234,567 items");
    }
}

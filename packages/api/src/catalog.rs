//! Pure transforms over the cached product list.
//!
//! The views keep a transient copy of the last known server state and apply
//! these transforms to it; keeping them pure makes the list behavior
//! testable without a network.

use crate::models::Product;

/// Sort direction over product ids (a proxy for creation order).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Filter by a case-insensitive substring of the product name or owner
/// username, then sort by id.
pub fn filter_and_sort(products: &[Product], term: &str, order: SortOrder) -> Vec<Product> {
    let needle = term.to_lowercase();
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.user
                    .as_ref()
                    .is_some_and(|u| u.username.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    match order {
        SortOrder::Ascending => filtered.sort_by_key(|p| p.id),
        SortOrder::Descending => filtered.sort_by_key(|p| std::cmp::Reverse(p.id)),
    }
    filtered
}

/// Drop exactly the element with the given id, keeping the rest in order.
pub fn remove_by_id(products: Vec<Product>, id: i64) -> Vec<Product> {
    products.into_iter().filter(|p| p.id != id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductOwner;

    fn product(id: i64, name: &str, owner: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 10.0,
            user_id: 1,
            image: None,
            user: Some(ProductOwner {
                username: owner.to_string(),
            }),
        }
    }

    #[test]
    fn test_search_matches_name_substring_case_insensitive() {
        let products = vec![product(1, "Lamp", "alice"), product(2, "Chair", "bob")];

        let result = filter_and_sort(&products, "cha", SortOrder::Ascending);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
        assert_eq!(result[0].name, "Chair");
    }

    #[test]
    fn test_search_matches_owner_username() {
        let products = vec![product(1, "Lamp", "alice"), product(2, "Chair", "bob")];

        let result = filter_and_sort(&products, "ALI", SortOrder::Ascending);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Lamp");
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let products = vec![product(3, "a", "x"), product(1, "b", "y")];
        let result = filter_and_sort(&products, "", SortOrder::Ascending);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_sort_orders_are_exact_reverses() {
        let products = vec![
            product(2, "b", "x"),
            product(5, "c", "x"),
            product(1, "a", "x"),
        ];

        let asc = filter_and_sort(&products, "", SortOrder::Ascending);
        let mut desc = filter_and_sort(&products, "", SortOrder::Descending);
        desc.reverse();

        assert_eq!(asc, desc);
        assert_eq!(asc.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 5]);
    }

    #[test]
    fn test_remove_by_id_drops_exactly_one() {
        let products = vec![
            product(4, "a", "x"),
            product(5, "b", "x"),
            product(6, "c", "x"),
        ];

        let remaining = remove_by_id(products, 5);
        assert_eq!(remaining.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4, 6]);
    }

    #[test]
    fn test_remove_missing_id_is_identity() {
        let products = vec![product(1, "a", "x")];
        let remaining = remove_by_id(products.clone(), 99);
        assert_eq!(remaining, products);
    }

    #[test]
    fn test_product_without_owner_still_searchable_by_name() {
        let mut p = product(1, "Desk", "x");
        p.user = None;
        let result = filter_and_sort(&[p], "desk", SortOrder::Ascending);
        assert_eq!(result.len(), 1);
    }
}

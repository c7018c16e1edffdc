//! Client-side restaurant filter
//!
//! Three independent criteria combined with AND. An empty criterion places
//! no constraint. Matches keep their source order.

use shared::Restaurant;

/// Letters offered as first-letter chips
pub const FILTER_LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Cities offered as city chips
pub const FILTER_CITIES: [&str; 6] = [
    "Madrid",
    "Barcelona",
    "Valencia",
    "Sevilla",
    "Bilbao",
    "Málaga",
];

/// Restaurant filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    /// Substring of name or description
    pub query: String,
    /// Required first letter of the name
    pub letter: String,
    /// Substring of the city
    pub city: String,
}

impl RestaurantFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.letter.is_empty() && self.city.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `r` satisfies every active criterion
    pub fn matches(&self, r: &Restaurant) -> bool {
        if !self.query.is_empty()
            && !contains_ci(&r.name, &self.query)
            && !contains_ci(&r.description, &self.query)
        {
            return false;
        }
        if !self.letter.is_empty() && !starts_with_letter_ci(&r.name, &self.letter) {
            return false;
        }
        if !self.city.is_empty() && !contains_ci(&r.city, &self.city) {
            return false;
        }
        true
    }

    /// Stable filter of `restaurants`
    pub fn apply(&self, restaurants: &[Restaurant]) -> Vec<Restaurant> {
        restaurants
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Compares only the first character of `letter`
fn starts_with_letter_ci(name: &str, letter: &str) -> bool {
    match (name.chars().next(), letter.chars().next()) {
        (Some(n), Some(l)) => n.to_lowercase().eq(l.to_lowercase()),
        (None, Some(_)) => false,
        (_, None) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn restaurant(id: i64, name: &str, description: &str, city: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.into(),
            description: description.into(),
            address: "Calle Mayor 1".into(),
            city: city.into(),
            photo_url: String::new(),
            created_at: None,
        }
    }

    fn sample() -> Vec<Restaurant> {
        vec![
            restaurant(1, "La Tagliatella", "Pasta fresca", "Madrid"),
            restaurant(2, "Botín", "Cochinillo asado", "Madrid"),
            restaurant(3, "El Celler", "Cocina catalana", "Girona"),
            restaurant(4, "bar Pinotxo", "Tapas en la Boqueria", "Barcelona"),
            restaurant(5, "Casa Montaña", "Bodega clásica", "Valencia"),
        ]
    }

    fn ids(rs: &[Restaurant]) -> Vec<i64> {
        rs.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let all = sample();
        assert_eq!(RestaurantFilter::default().apply(&all), all);
    }

    #[test]
    fn query_matches_name_or_description_ignoring_case() {
        let all = sample();
        let f = RestaurantFilter {
            query: "COCI".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&all)), vec![3]);

        let f = RestaurantFilter {
            query: "tagli".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&all)), vec![1]);
    }

    #[test]
    fn letter_is_case_insensitive_prefix() {
        let all = sample();
        let f = RestaurantFilter {
            letter: "B".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&all)), vec![2, 4]);
    }

    #[test]
    fn city_is_substring() {
        let all = sample();
        let f = RestaurantFilter {
            city: "MAD".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&all)), vec![1, 2]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let all = sample();
        let f = RestaurantFilter {
            query: "asado".into(),
            letter: "b".into(),
            city: "madrid".into(),
        };
        assert_eq!(ids(&f.apply(&all)), vec![2]);

        let f = RestaurantFilter {
            query: "asado".into(),
            letter: "L".into(),
            city: String::new(),
        };
        assert!(f.apply(&all).is_empty());
    }

    #[test]
    fn empty_collection_with_active_filter_is_empty() {
        let f = RestaurantFilter {
            query: "x".into(),
            letter: "A".into(),
            city: "Madrid".into(),
        };
        assert!(f.apply(&[]).is_empty());
    }

    #[test]
    fn accented_city_matches_without_case() {
        let all = sample();
        let f = RestaurantFilter {
            query: "MONTAÑA".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&all)), vec![5]);
    }

    #[test]
    fn clear_resets_all_criteria() {
        let mut f = RestaurantFilter {
            query: "a".into(),
            letter: "B".into(),
            city: "c".into(),
        };
        f.clear();
        assert!(f.is_empty());
    }

    fn arb_restaurant() -> impl Strategy<Value = Restaurant> {
        (any::<i64>(), "[a-zA-Z ]{0,8}", "[a-zA-Z ]{0,8}", "[a-zA-Z]{0,6}")
            .prop_map(|(id, n, d, c)| restaurant(id, &n, &d, &c))
    }

    fn arb_filter() -> impl Strategy<Value = RestaurantFilter> {
        ("[a-zA-Z]{0,2}", "[a-zA-Z]{0,1}", "[a-zA-Z]{0,2}").prop_map(|(query, letter, city)| {
            RestaurantFilter {
                query,
                letter,
                city,
            }
        })
    }

    proptest! {
        #[test]
        fn result_is_ordered_subset(all in prop::collection::vec(arb_restaurant(), 0..20), f in arb_filter()) {
            let out = f.apply(&all);
            let mut rest = all.iter();
            for r in &out {
                prop_assert!(rest.any(|x| x == r));
            }
        }

        #[test]
        fn included_iff_every_criterion_holds(all in prop::collection::vec(arb_restaurant(), 0..20), f in arb_filter()) {
            let out = f.apply(&all);
            let expected: Vec<&Restaurant> = all
                .iter()
                .filter(|r| {
                    (f.query.is_empty()
                        || r.name.to_lowercase().contains(&f.query.to_lowercase())
                        || r.description.to_lowercase().contains(&f.query.to_lowercase()))
                        && (f.letter.is_empty()
                            || r.name.to_uppercase().starts_with(&f.letter.to_uppercase()))
                        && (f.city.is_empty()
                            || r.city.to_lowercase().contains(&f.city.to_lowercase()))
                })
                .collect();
            prop_assert_eq!(out.iter().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn filtering_is_idempotent(all in prop::collection::vec(arb_restaurant(), 0..20), f in arb_filter()) {
            let once = f.apply(&all);
            prop_assert_eq!(f.apply(&once), once.clone());
        }
    }
}

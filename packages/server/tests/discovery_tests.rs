//! Discovery query properties over in-memory snapshots.

mod common;

use common::*;
use marketplace_core::common::utils::GeoPoint;
use marketplace_core::common::PageRequest;
use marketplace_core::domains::providers::{
    discover, DiscoveryFilters, DistanceMap, DistanceMatch, GeoRadius, OrderBy, Provider,
};

fn names(providers: &[marketplace_core::domains::providers::ProviderMatch]) -> Vec<&str> {
    providers.iter().map(|m| m.provider.name.as_str()).collect()
}

fn campinas() -> GeoPoint {
    GeoPoint::new(-22.9056, -47.0608).unwrap()
}

#[test]
fn inactive_providers_never_appear() {
    let providers = vec![
        provider("Active"),
        provider("Hidden").inactive().verified().rated(5.0, 10),
    ];

    let page = discover(providers, &DiscoveryFilters::default(), None);

    assert_eq!(page.total, 1);
    assert_eq!(names(&page.results), vec!["Active"]);
}

#[test]
fn group_slug_matches_any_member() {
    let providers = vec![
        provider("Eletricista").with_category("eletricista"),
        provider("Encanador").with_category("encanador"),
        provider("Pintor").with_category("pintor"),
    ];
    let filters = DiscoveryFilters::builder().category_slug("instalacoes").build();

    let page = discover(providers, &filters, None);

    let mut found = names(&page.results);
    found.sort();
    assert_eq!(found, vec!["Eletricista", "Encanador"]);
}

#[test]
fn leaf_slug_matches_exactly() {
    let providers = vec![
        provider("Eletricista").with_category("eletricista"),
        provider("Encanador").with_category("encanador"),
    ];
    let filters = DiscoveryFilters::builder().category_slug("encanador").build();

    let page = discover(providers, &filters, None);

    assert_eq!(names(&page.results), vec!["Encanador"]);
}

#[test]
fn unknown_category_yields_empty_result() {
    let providers = vec![provider("Eletricista").with_category("eletricista")];
    let filters = DiscoveryFilters::builder().category_slug("astronauta").build();

    let page = discover(providers, &filters, None);

    assert_eq!(page.total, 0);
    assert!(page.results.is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    for term in ["silva", "SILVA", "João S"] {
        let providers = vec![provider("João Silva"), provider("Maria Souza")];
        let filters = DiscoveryFilters::builder().search(term).build();

        let page = discover(providers, &filters, None);

        assert_eq!(names(&page.results), vec!["João Silva"], "term {term:?}");
    }
}

#[test]
fn search_matches_description() {
    let providers = vec![
        provider("Ana").described("Conserto de geladeiras e freezers"),
        provider("Bia"),
    ];
    let filters = DiscoveryFilters::builder().search("geladeira").build();

    let page = discover(providers, &filters, None);

    assert_eq!(names(&page.results), vec!["Ana"]);
}

#[test]
fn rating_order_is_non_increasing() {
    let providers = vec![
        provider("a").rated(3.5, 2),
        provider("b"),
        provider("c").rated(4.8, 9),
        provider("d").rated(1.0, 1),
        provider("e").rated(4.8, 3),
    ];
    let filters = DiscoveryFilters::builder().order_by(OrderBy::Rating).build();

    let page = discover(providers, &filters, None);

    let ratings: Vec<f64> = page
        .results
        .iter()
        .map(|m| m.provider.average_rating.unwrap_or(0.0))
        .collect();
    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]), "{ratings:?}");
    // Display value untouched for unrated providers.
    assert_eq!(page.results.last().map(|m| m.provider.average_rating), Some(None));
}

#[test]
fn geo_radius_filters_and_ignores_city() {
    let near = provider("Near").in_city("Valinhos");
    let far = provider("Far").in_city("Campinas");
    let unknown = provider("Unlisted").in_city("Campinas");
    let distances = DistanceMap::from_matches(
        vec![
            DistanceMatch {
                provider_id: near.id,
                distance_km: 8.0,
            },
            DistanceMatch {
                provider_id: far.id,
                distance_km: 80.0,
            },
        ],
        10.0,
    );
    let filters = DiscoveryFilters::builder()
        .city("Campinas")
        .geo(GeoRadius {
            origin: campinas(),
            radius_km: 10.0,
        })
        .build();

    let page = discover(vec![near, far, unknown], &filters, Some(&distances));

    assert_eq!(names(&page.results), vec!["Near"]);
    assert_eq!(page.results[0].distance_km, Some(8.0));
}

#[test]
fn distance_order_is_ascending() {
    let a = provider("a");
    let b = provider("b");
    let c = provider("c");
    let distances = DistanceMap::from_matches(
        vec![
            DistanceMatch {
                provider_id: a.id,
                distance_km: 7.5,
            },
            DistanceMatch {
                provider_id: b.id,
                distance_km: 0.4,
            },
            DistanceMatch {
                provider_id: c.id,
                distance_km: 3.0,
            },
        ],
        50.0,
    );
    let filters = DiscoveryFilters::builder()
        .geo(GeoRadius {
            origin: campinas(),
            radius_km: 50.0,
        })
        .order_by(OrderBy::Distance)
        .build();

    let page = discover(vec![a, b, c], &filters, Some(&distances));

    assert_eq!(names(&page.results), vec!["b", "c", "a"]);
}

#[test]
fn city_filter_is_exact() {
    let providers = vec![
        provider("Here").in_city("Campinas"),
        provider("Elsewhere").in_city("Campinas do Sul"),
    ];
    let filters = DiscoveryFilters::builder().city("Campinas").build();

    let page = discover(providers, &filters, None);

    assert_eq!(names(&page.results), vec!["Here"]);
}

#[test]
fn pagination_slices_after_counting() {
    let providers: Vec<Provider> = (0..12)
        .map(|i| provider(&format!("p{i:02}")).created_days_ago(i))
        .collect();
    let filters = DiscoveryFilters::builder()
        .page(PageRequest::new(2, 5))
        .build();

    let page = discover(providers, &filters, None);

    assert_eq!(page.total, 12);
    assert_eq!(names(&page.results), vec!["p05", "p06", "p07", "p08", "p09"]);
}

#[test]
fn page_past_the_end_is_empty() {
    let providers = vec![provider("only")];
    let filters = DiscoveryFilters::builder()
        .page(PageRequest::new(3, 5))
        .build();

    let page = discover(providers, &filters, None);

    assert_eq!(page.total, 1);
    assert!(page.results.is_empty());
}

#[test]
fn default_ordering_end_to_end() {
    let providers = vec![
        provider("unverified-rated").rated(4.9, 20),
        provider("verified-unrated").verified(),
        provider("verified-rated").verified().rated(4.5, 12),
    ];

    let page = discover(providers, &DiscoveryFilters::default(), None);

    assert_eq!(
        names(&page.results),
        vec!["verified-rated", "verified-unrated", "unverified-rated"]
    );
    assert!(page.results.iter().all(|m| m.distance_km.is_none()));
}

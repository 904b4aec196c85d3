mod common;

use collabnet::{Error, IdentityQuery, IdentityResolver, NetworkBuilder, NodeKey, PersonId, RoleFilter};
use common::film_dataset;

#[test]
fn test_shared_name_fails_by_name_and_succeeds_by_id() {
    let dataset = film_dataset();
    let builder = NetworkBuilder::new(&dataset);

    match builder.build_by_name("A") {
        Err(Error::AmbiguousIdentity { name, candidates }) => {
            assert_eq!(name, "A");
            assert_eq!(candidates, vec![PersonId::from("5"), PersonId::from("6")]);
        }
        other => panic!("expected ambiguous identity, got {:?}", other),
    }

    let graph = builder
        .build_by_id(&PersonId::from("5"), &RoleFilter::All)
        .unwrap();
    let key = NodeKey::from("A");
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.node(&key).unwrap().is_target());

    let collisions = graph.collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].key, key);
    assert_eq!(
        collisions[0].ids,
        vec![PersonId::from("5"), PersonId::from("6")]
    );
}

#[test]
fn test_unknown_name_and_id_are_not_found() {
    let dataset = film_dataset();
    let resolver = IdentityResolver::new(&dataset);

    assert!(matches!(
        resolver.resolve_by_name("Nobody"),
        Err(Error::IdentityNotFound {
            query: IdentityQuery::Name(_)
        })
    ));
    assert!(matches!(
        resolver.resolve_by_id(&PersonId::from("99")),
        Err(Error::IdentityNotFound {
            query: IdentityQuery::Id(_)
        })
    ));
}

#[test]
fn test_name_lookup_is_exact() {
    let dataset = film_dataset();
    let resolver = IdentityResolver::new(&dataset);

    assert!(resolver.resolve_by_name("ana ruiz").is_err());
    assert!(resolver.resolve_by_name("Ana").is_err());
    assert_eq!(
        resolver.resolve_unique("Ana Ruiz").unwrap().id,
        PersonId::from("1")
    );
}

#[test]
fn test_ranked_list_by_id_for_ambiguous_name() {
    let dataset = film_dataset();
    let builder = NetworkBuilder::new(&dataset);

    assert!(builder.collaboration_frequency("A", None).is_err());
    let entries = builder
        .collaboration_frequency_by_id(&PersonId::from("6"), None)
        .unwrap();
    assert!(entries.is_empty());
}

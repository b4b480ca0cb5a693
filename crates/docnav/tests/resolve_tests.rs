//! Resolver tests

use docnav::*;
use pretty_assertions::assert_eq;

fn known(ids: &[&str]) -> KnownDocs {
    ids.iter().copied().collect()
}

fn getting_started() -> SidebarSpec {
    SidebarSpec::new().with_sidebar(
        "docsSidebar",
        vec![Category::new("Getting Started")
            .children(["intro", "setup"])
            .into()],
    )
}

/// Flatten the authored document ids of one sidebar, depth first.
fn authored_ids<'a>(children: &'a [Child], out: &mut Vec<&'a str>) {
    for child in children {
        match child {
            Child::Document(doc) => out.push(&doc.id),
            Child::Category(cat) => authored_ids(&cat.children, out),
        }
    }
}

fn nested_spec() -> SidebarSpec {
    SidebarSpec::new()
        .with_sidebar(
            "docsSidebar",
            vec![
                DocumentRef::new("intro").with_label("Welcome").into(),
                Category::new("Payments")
                    .collapsed(true)
                    .child("payments/overview")
                    .child(
                        Category::new("Providers")
                            .children(["payments/stripe", "payments/mobile-money"]),
                    )
                    .into(),
                Category::new("Zebra").child("guides/go-live").into(),
                Category::new("Alpha").child("guides/webhooks").into(),
            ],
        )
        .with_sidebar("apiSidebar", vec!["api/endpoints".into(), "api/errors".into()])
}

fn nested_known() -> KnownDocs {
    known(&[
        "intro",
        "payments/overview",
        "payments/stripe",
        "payments/mobile-money",
        "guides/go-live",
        "guides/webhooks",
        "api/endpoints",
        "api/errors",
    ])
}

// ═══════════════════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_single_category_resolves_in_order() {
    let tree = resolve(&getting_started(), &known(&["intro", "setup"])).unwrap();

    let sidebar = tree.sidebar("docsSidebar").unwrap();
    assert_eq!(sidebar.items.len(), 1);
    let expected = NavNode::Category(NavCategory {
        label: "Getting Started".into(),
        collapsed: false,
        position: 0,
        children: vec![
            NavNode::Doc(NavDocument {
                id: "intro".into(),
                label: None,
                position: 0,
            }),
            NavNode::Doc(NavDocument {
                id: "setup".into(),
                label: None,
                position: 1,
            }),
        ],
    });
    assert_eq!(sidebar.items[0], expected);
}

#[test]
fn test_missing_document_reports_breadcrumb() {
    let err = resolve(&getting_started(), &known(&["intro"])).unwrap_err();
    assert_eq!(
        err.problems(),
        [Problem::UnresolvedDocumentRef {
            id: "setup".into(),
            location: "docsSidebar > Getting Started".into(),
        }]
    );
}

#[test]
fn test_same_document_in_two_categories() {
    let spec = SidebarSpec::new().with_sidebar(
        "docsSidebar",
        vec![
            Category::new("A").child("x").into(),
            Category::new("B").child("x").into(),
        ],
    );

    // Unique per sidebar by default
    let err = resolve(&spec, &known(&["x"])).unwrap_err();
    assert_eq!(
        err.problems(),
        [Problem::DuplicateDocumentRef {
            id: "x".into(),
            first: "docsSidebar > A".into(),
            first_position: 0,
            duplicate: "docsSidebar > B".into(),
            duplicate_position: 0,
        }]
    );

    // Allowed when uniqueness is only enforced among siblings
    let resolver = Resolver::new(ResolveContext::new().duplicate_scope(DuplicateScope::Category));
    let tree = resolver.resolve(&spec, &known(&["x"])).unwrap();
    assert_eq!(tree.sidebar("docsSidebar").unwrap().document_ids(), ["x", "x"]);
}

#[test]
fn test_empty_category_resolves_to_empty_node() {
    let spec = SidebarSpec::new().with_sidebar("docsSidebar", vec![Category::new("Soon").into()]);
    let tree = resolve(&spec, &KnownDocs::new()).unwrap();

    match &tree.sidebar("docsSidebar").unwrap().items[0] {
        NavNode::Category(cat) => {
            assert_eq!(cat.label, "Soon");
            assert!(cat.children.is_empty());
        }
        other => panic!("expected category, got {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_order_is_preserved_not_sorted() {
    let spec = nested_spec();
    let tree = resolve(&spec, &nested_known()).unwrap();

    assert_eq!(tree.names(), ["docsSidebar", "apiSidebar"]);
    for (name, children) in spec.iter() {
        let mut expected = Vec::new();
        authored_ids(children, &mut expected);
        assert_eq!(tree.sidebar(name).unwrap().document_ids(), expected);
    }

    let labels: Vec<_> = tree.sidebar("docsSidebar").unwrap().items.iter().map(NavNode::display_label).collect();
    assert_eq!(labels, ["Welcome", "Payments", "Zebra", "Alpha"]);
}

#[test]
fn test_authored_attributes_pass_through() {
    let tree = resolve(&nested_spec(), &nested_known()).unwrap();
    let items = &tree.sidebar("docsSidebar").unwrap().items;

    assert_eq!(
        items[0],
        NavNode::Doc(NavDocument {
            id: "intro".into(),
            label: Some("Welcome".into()),
            position: 0,
        })
    );
    match &items[1] {
        NavNode::Category(cat) => {
            assert!(cat.collapsed);
            assert_eq!(cat.position, 1);
            assert!(matches!(&cat.children[1], NavNode::Category(p) if p.label == "Providers" && !p.collapsed));
        }
        other => panic!("expected category, got {:?}", other),
    }
}

#[test]
fn test_every_unresolved_reference_reported_once() {
    let spec = nested_spec();
    let partial = known(&["intro", "payments/stripe", "guides/webhooks", "api/errors"]);
    let err = resolve(&spec, &partial).unwrap_err();

    let unresolved: Vec<(&str, &str)> = err
        .problems()
        .iter()
        .map(|p| match p {
            Problem::UnresolvedDocumentRef { id, location } => (id.as_str(), location.as_str()),
            other => panic!("unexpected problem {:?}", other),
        })
        .collect();

    assert_eq!(
        unresolved,
        [
            ("payments/overview", "docsSidebar > Payments"),
            ("payments/mobile-money", "docsSidebar > Payments > Providers"),
            ("guides/go-live", "docsSidebar > Zebra"),
            ("api/endpoints", "apiSidebar"),
        ]
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let spec = nested_spec();
    let docs = nested_known();

    let first = resolve(&spec, &docs).unwrap();
    let second = resolve(&spec, &docs).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_repeated_document_reports_each_extra_occurrence() {
    let spec = SidebarSpec::new().with_sidebar(
        "docs",
        vec![
            "a".into(),
            Category::new("C").children(["b", "a"]).into(),
            "a".into(),
        ],
    );
    let err = resolve(&spec, &known(&["a", "b"])).unwrap_err();

    assert_eq!(
        err.problems(),
        [
            Problem::DuplicateDocumentRef {
                id: "a".into(),
                first: "docs".into(),
                first_position: 0,
                duplicate: "docs > C".into(),
                duplicate_position: 1,
            },
            Problem::DuplicateDocumentRef {
                id: "a".into(),
                first: "docs".into(),
                first_position: 0,
                duplicate: "docs".into(),
                duplicate_position: 2,
            },
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Sidebar names and limits
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_sidebar_names_reported_before_tree_problems() {
    let mut spec = SidebarSpec::new();
    spec.insert("docs", vec!["missing".into()]);
    spec.insert("docs", vec![]);

    let err = resolve(&spec, &KnownDocs::new()).unwrap_err();
    assert_eq!(
        err.problems(),
        [
            Problem::DuplicateSidebarName { name: "docs".into() },
            Problem::UnresolvedDocumentRef {
                id: "missing".into(),
                location: "docs".into(),
            },
        ]
    );
}

#[test]
fn test_repeated_sidebar_tree_is_still_checked() {
    let mut spec = SidebarSpec::new();
    spec.insert("docs", vec!["a".into()]);
    spec.insert(
        "docs",
        vec![Category::new("Extra").children(["ghost", "ghost"]).into()],
    );
    spec.insert("api", vec!["missing".into()]);

    let err = resolve(&spec, &known(&["a"])).unwrap_err();
    assert_eq!(
        err.problems(),
        [
            Problem::DuplicateSidebarName { name: "docs".into() },
            Problem::UnresolvedDocumentRef {
                id: "ghost".into(),
                location: "docs > Extra".into(),
            },
            Problem::UnresolvedDocumentRef {
                id: "ghost".into(),
                location: "docs > Extra".into(),
            },
            Problem::DuplicateDocumentRef {
                id: "ghost".into(),
                first: "docs > Extra".into(),
                first_position: 0,
                duplicate: "docs > Extra".into(),
                duplicate_position: 1,
            },
            Problem::UnresolvedDocumentRef {
                id: "missing".into(),
                location: "api".into(),
            },
        ]
    );
}

#[test]
fn test_repeated_sidebar_tree_does_not_collide_with_first() {
    // The repeated tree is checked on its own, not against the first one
    let mut spec = SidebarSpec::new();
    spec.insert("docs", vec!["a".into()]);
    spec.insert("docs", vec!["a".into()]);

    let err = resolve(&spec, &known(&["a"])).unwrap_err();
    assert_eq!(
        err.problems(),
        [Problem::DuplicateSidebarName { name: "docs".into() }]
    );
}

#[test]
fn test_default_context_has_no_nesting_limit() {
    let mut cat = Category::new("L200").child("leaf");
    for level in (1..200).rev() {
        cat = Category::new(format!("L{}", level)).child(cat);
    }
    let spec = SidebarSpec::new().with_sidebar("docs", vec![cat.into()]);

    let tree = resolve(&spec, &known(&["leaf"])).unwrap();
    assert_eq!(tree.sidebar("docs").unwrap().document_ids(), ["leaf"]);
}

#[test]
fn test_deep_nesting_within_limit() {
    let mut cat = Category::new("L20").child("leaf");
    for level in (1..20).rev() {
        cat = Category::new(format!("L{}", level)).child(cat);
    }
    let spec = SidebarSpec::new().with_sidebar("docs", vec![cat.into()]);

    let tree = resolve(&spec, &known(&["leaf"])).unwrap();
    assert_eq!(tree.sidebar("docs").unwrap().document_ids(), ["leaf"]);

    let err = Resolver::new(ResolveContext::with_max_depth(5))
        .resolve(&spec, &known(&["leaf"]))
        .unwrap_err();
    assert_eq!(
        err.problems(),
        [Problem::NestingTooDeep {
            location: "docs > L1 > L2 > L3 > L4 > L5 > L6".into(),
            max_depth: 5,
        }]
    );
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let resolver = std::sync::Arc::new(Resolver::default());
    let spec = std::sync::Arc::new(nested_spec());
    let docs = std::sync::Arc::new(nested_known());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (resolver, spec, docs) = (resolver.clone(), spec.clone(), docs.clone());
            std::thread::spawn(move || resolver.resolve(&spec, &docs).unwrap())
        })
        .collect();

    let expected = resolve(&nested_spec(), &nested_known()).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

use turbolizer_edge::graph::{GNode, Graph};
use turbolizer_edge::{Edge, Error, Geometry, NodeId, edge_to_str};

fn node(id: u32, rank: i32) -> GNode {
    GNode {
        id,
        rank,
        visible: true,
        input_count: 2,
        normal_height: 30.0,
        output_approach: 15.0,
        ..Default::default()
    }
}

fn pair(source: GNode, target: GNode) -> (Graph, NodeId, NodeId) {
    let mut g = Graph::new();
    let s = g.add_node(source).unwrap();
    let t = g.add_node(target).unwrap();
    (g, s, t)
}

#[test]
fn new_edges_start_hidden_and_unnumbered() {
    let (_, s, t) = pair(node(1, 0), node(2, 1));
    let e = Edge::new(s, t, 1, "effect");
    assert!(!e.visible);
    assert_eq!(e.back_edge_number, 0);
    assert_eq!(e.edge_type, "effect");
    assert_eq!((e.source(), e.target(), e.index()), (s, t, 1));
}

#[test]
fn visibility_requires_edge_and_both_endpoints() {
    for (edge, source, target) in [
        (true, true, true),
        (false, true, true),
        (true, false, true),
        (true, true, false),
        (false, false, false),
    ] {
        let (g, s, t) = pair(
            GNode {
                visible: source,
                ..node(1, 0)
            },
            GNode {
                visible: target,
                ..node(2, 1)
            },
        );
        let mut e = Edge::new(s, t, 0, "value");
        e.set_visible(edge);
        assert_eq!(
            e.is_visible(&g).unwrap(),
            edge && source && target,
            "edge={edge} source={source} target={target}"
        );
    }
}

#[test]
fn back_edge_needs_loop_target_with_lower_rank() {
    let cases = [
        (true, 1, 5, true),
        (true, 5, 5, false),
        (true, 6, 5, false),
        (false, 1, 5, false),
    ];
    for (back_edge_target, target_rank, source_rank, expected) in cases {
        let (g, s, t) = pair(
            node(1, source_rank),
            GNode {
                back_edge_target,
                ..node(2, target_rank)
            },
        );
        let e = Edge::new(s, t, 0, "control");
        assert_eq!(e.is_back_edge(&g).unwrap(), expected);
    }
}

#[test]
fn string_id_joins_source_index_and_target_ids() {
    let (g, s, t) = pair(node(17, 0), node(4, 1));
    let e = Edge::new(s, t, 3, "value");
    assert_eq!(e.string_id(&g).unwrap(), "17,3,4");
    assert_eq!(edge_to_str(&e, &g).unwrap(), "17,3,4");

    let again = Edge::new(s, t, 3, "control");
    assert_eq!(again.string_id(&g).unwrap(), e.string_id(&g).unwrap());
}

#[test]
fn string_id_distinguishes_triples() {
    let mut g = Graph::new();
    let a = g.add_node(node(1, 0)).unwrap();
    let b = g.add_node(node(12, 0)).unwrap();
    let c = g.add_node(node(11, 0)).unwrap();
    let d = g.add_node(node(2, 0)).unwrap();

    let ids = [
        Edge::new(a, b, 1, "value").string_id(&g).unwrap(),
        Edge::new(c, d, 1, "value").string_id(&g).unwrap(),
        Edge::new(a, c, 21, "value").string_id(&g).unwrap(),
        Edge::new(b, a, 1, "value").string_id(&g).unwrap(),
    ];
    for (i, x) in ids.iter().enumerate() {
        for y in &ids[i + 1..] {
            assert_ne!(x, y);
        }
    }
}

#[test]
fn missing_endpoint_is_an_error() {
    let (g, s, _) = pair(node(1, 0), node(2, 1));
    let e = Edge::new(s, NodeId::new(5), 0, "value");
    assert!(matches!(e.is_visible(&g), Err(Error::MissingEndpoint { .. })));
    assert!(matches!(e.is_back_edge(&g), Err(Error::MissingEndpoint { .. })));
    assert!(matches!(e.string_id(&g), Err(Error::MissingEndpoint { .. })));
}

#[test]
fn routes_against_graph_node_geometry() {
    let geometry = Geometry::default();
    let (g, s, t) = pair(
        GNode {
            x: 0.0,
            y: 0.0,
            ..node(1, 0)
        },
        GNode {
            x: 0.0,
            y: 200.0,
            ..node(2, 1)
        },
    );
    let e = Edge::new(s, t, 1, "value");

    // Source output approach: 0 + 15 + 30 + 12 = 57; target input 1 approach:
    // 200 - 39 - 20 - 12 = 129, which is below the source, so the edge drops straight.
    assert_eq!(e.input_horizontal_position(&g, &geometry, false).unwrap(), 75.0);
    let path = e.generate_path(&g, &geometry, false).unwrap();
    assert_eq!(path.to_svg_d(), "M75,42L75,57L75,57L75,129L75,169");
}

#[test]
fn show_types_moves_the_output_port_down() {
    let geometry = Geometry::default();
    let (g, s, t) = pair(
        GNode {
            label_height: 20.0,
            ..node(1, 0)
        },
        GNode {
            y: 400.0,
            ..node(2, 1)
        },
    );
    let e = Edge::new(s, t, 0, "value");
    let plain = e.generate_path(&g, &geometry, false).unwrap();
    let typed = e.generate_path(&g, &geometry, true).unwrap();
    assert_eq!(plain.start().map(|p| p.y), Some(42.0));
    assert_eq!(typed.start().map(|p| p.y), Some(62.0));
    assert_eq!(plain.end(), typed.end());
}

#[test]
fn edge_round_trips_through_json() {
    let mut e = Edge::new(NodeId::new(0), NodeId::new(1), 2, "frame-state");
    e.set_back_edge_number(3);
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(
        json,
        r#"{"source":0,"target":1,"index":2,"type":"frame-state","backEdgeNumber":3,"visible":false}"#
    );

    let parsed: Edge =
        serde_json::from_str(r#"{"source":4,"target":5,"index":0,"type":"control"}"#).unwrap();
    assert_eq!(parsed, Edge::new(NodeId::new(4), NodeId::new(5), 0, "control"));
}

//! End-to-end scenarios over the built-in seed graph.

use std::collections::HashSet;

use lognet_core::{ChangeEntry, Color, Node, NodeId, RecolorCause};
use lognet_graph::GraphStore;
use lognet_sim::{conflicts, Simulator};

fn color(sim: &Simulator, id: &str) -> Color {
    sim.graph().color_of(&NodeId::from(id)).unwrap()
}

fn neighbors(sim: &Simulator, id: &str) -> HashSet<String> {
    sim.graph()
        .connections(&NodeId::from(id))
        .unwrap()
        .iter()
        .map(|n| n.to_string())
        .collect()
}

#[test]
fn recolor_a_to_red() {
    let mut sim = Simulator::seeded();
    let conflicts_before = sim.conflict_labels();

    let outcome = sim.on_color_select("A", Color::Red).unwrap();

    assert_eq!(color(&sim, "A"), Color::Red);
    // Red influences gray neighbors as orange.
    assert_eq!(color(&sim, "B"), Color::Orange);
    // E votes over A=red, F=gray, I=gray.
    assert_eq!(color(&sim, "E"), Color::Gray);
    assert_eq!(color(&sim, "P"), Color::Blue);

    assert_eq!(sim.conflict_labels(), conflicts_before);
    assert!(sim.conflict_labels().is_empty());

    let history: Vec<&ChangeEntry> = sim.history().changes().collect();
    assert_eq!(history, vec![&ChangeEntry::new("A".into(), Color::Red)]);

    let causes: Vec<(String, RecolorCause)> = outcome
        .recolors
        .iter()
        .map(|r| (r.node_id.to_string(), r.cause))
        .collect();
    assert_eq!(
        causes,
        vec![
            ("A".to_string(), RecolorCause::User),
            ("B".to_string(), RecolorCause::Influence),
            ("E".to_string(), RecolorCause::Plurality),
        ]
    );
}

#[test]
fn blue_on_b_greens_gray_neighbors() {
    let mut sim = Simulator::seeded();
    sim.on_color_select("B", Color::Blue).unwrap();

    // B -> A (blue, sticky), C (red, sticky), F (gray).
    assert_eq!(color(&sim, "B"), Color::Blue);
    assert_eq!(color(&sim, "A"), Color::Blue);
    assert_eq!(color(&sim, "C"), Color::Red);
    assert_eq!(color(&sim, "F"), Color::Green);
}

#[test]
fn white_neighbor_is_recomputed_by_vote() {
    let mut sim = Simulator::seeded();
    // F is adjacent to white E. E's neighbors afterwards: A=blue, F=purple, I=gray.
    let outcome = sim.on_color_select("F", Color::Purple).unwrap();

    assert_eq!(color(&sim, "E"), Color::Yellow);
    assert!(outcome
        .recolors
        .iter()
        .any(|r| r.node_id.as_str() == "E" && r.cause == RecolorCause::Tie));
    // Gray neighbors of F take purple as-is.
    assert_eq!(color(&sim, "B"), Color::Purple);
    assert_eq!(color(&sim, "G"), Color::Purple);
    assert_eq!(color(&sim, "J"), Color::Purple);
}

#[test]
fn no_cascade_beyond_one_hop() {
    let mut sim = Simulator::seeded();
    let before = sim.snapshot();
    let hop: HashSet<String> = neighbors(&sim, "B");

    sim.on_color_select("B", Color::Blue).unwrap();
    let after = sim.snapshot();

    for (old, new) in before.nodes.iter().zip(&after.nodes) {
        if old.id.as_str() == "B" || hop.contains(old.id.as_str()) {
            continue;
        }
        assert_eq!(old.color, new.color, "node {} changed", old.id);
    }
}

#[test]
fn tie_produces_yellow() {
    let graph = GraphStore::from_nodes(vec![
        Node::new("X", Color::Gray, &["W"]),
        Node::new("W", Color::White, &["X", "R", "G", "S"]),
        Node::new("R", Color::Red, &["W"]),
        Node::new("G", Color::Green, &["W"]),
        Node::new("S", Color::Green, &["W"]),
    ])
    .unwrap();
    let mut sim = Simulator::new(graph);

    // W's neighbors become red, red, green, green.
    sim.on_color_select("X", Color::Red).unwrap();

    assert_eq!(color(&sim, "W"), Color::Yellow);
}

#[test]
fn decided_colors_are_sticky() {
    let mut sim = Simulator::seeded();
    // C is red and adjacent to B.
    let outcome = sim.on_color_select("B", Color::Red).unwrap();

    assert_eq!(color(&sim, "C"), Color::Red);
    assert_eq!(sim.conflict_labels(), vec!["B ↔ C".to_string()]);
    assert_eq!(outcome.conflicts_introduced.len(), 1);
}

#[test]
fn blue_pair_conflict_reported_once() {
    let mut sim = Simulator::seeded();
    sim.on_color_select("L", Color::Blue).unwrap();
    sim.on_color_select("O", Color::Blue).unwrap();

    assert_eq!(
        sim.conflict_labels(),
        vec!["L ↔ P".to_string(), "O ↔ P".to_string()]
    );
    assert_eq!(
        conflicts::detect(sim.graph()),
        conflicts::detect(sim.graph())
    );
}

#[test]
fn history_keeps_every_user_change_in_order() {
    let mut sim = Simulator::seeded();
    for (id, c) in [("A", Color::Red), ("A", Color::Red), ("D", Color::Gray)] {
        sim.on_color_select(id, c).unwrap();
    }

    let seqs: Vec<u64> = sim.history().entries().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2]);
    assert_eq!(sim.view().history.len(), 3);
}

#[test]
fn view_serializes_for_presentation() {
    let mut sim = Simulator::seeded();
    sim.on_color_select("B", Color::Blue).unwrap();

    let json = serde_json::to_value(sim.view()).unwrap();
    assert_eq!(json["graph"]["nodes"][1]["color"], "blue");
    assert_eq!(json["conflicts"][0], "A ↔ B");
    assert_eq!(json["history"][0]["changed"], "B");
    assert_eq!(json["history"][0]["to"], "blue");
}

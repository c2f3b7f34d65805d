use newick_tree::Tree;
use newick_tree::newick::{to_newick, write_newick};

fn sample_tree() -> Tree {
    Tree::node(vec![
        Tree::leaf("Apteryx_haastii"),
        Tree::node(vec![Tree::leaf("Apteryx_owenii"), Tree::leaf("Apteryx_rowi")]),
    ])
}

#[test]
fn test_to_text() {
    assert_eq!(sample_tree().to_text(), "(Apteryx_haastii,(Apteryx_owenii,Apteryx_rowi))");
}

#[test]
fn test_display_and_to_newick_agree() {
    let tree = sample_tree();
    assert_eq!(format!("{tree}"), to_newick(&tree));
}

#[test]
fn test_write_newick_appends() {
    let mut out = String::from("tree = ");
    write_newick(&Tree::node(vec![Tree::leaf("A"), Tree::node(vec![])]), &mut out).unwrap();
    assert_eq!(out, "tree = (A,())");
}

#[test]
fn test_pattern_matching() {
    let tree = sample_tree();
    let Tree::Node { children } = &tree else {
        panic!("root should be an internal vertex");
    };
    assert!(matches!(&children[0], Tree::Leaf { name } if name == "Apteryx_haastii"));
    assert!(children[1].is_node());
}

#[test]
fn test_structural_equality() {
    assert_eq!(sample_tree(), sample_tree().clone());
    assert_ne!(
        Tree::node(vec![Tree::leaf("A"), Tree::leaf("B")]),
        Tree::node(vec![Tree::leaf("B"), Tree::leaf("A")])
    );
    assert_ne!(Tree::node(vec![]), Tree::node(vec![Tree::node(vec![])]));
}

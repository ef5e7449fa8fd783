use super::*;
use crate::models::formula_tree::Container;
use crate::models::serialized::SerializedNode;
use crate::models::token_type::TypeRegistry;

fn tree_of(formula: Vec<SerializedNode>) -> FormulaTree {
    let mut tree = FormulaTree::new(1, TypeRegistry::with_builtins());
    tree.set_formula(&formula).unwrap();
    tree
}

fn num(value: &str) -> SerializedNode {
    SerializedNode::leaf("number", value)
}

fn op(value: &str) -> SerializedNode {
    SerializedNode::leaf("operator", value)
}

fn group(elements: Vec<SerializedNode>) -> SerializedNode {
    SerializedNode::container("parentheses", elements)
}

#[test]
fn test_empty_tree_is_valid() {
    let tree = tree_of(vec![]);
    assert!(tree.is_valid());
    assert_eq!(tree.first_invalid(), None);
}

#[test]
fn test_simple_expression_is_valid() {
    assert!(tree_of(vec![num("5"), op("+"), num("3")]).is_valid());
    assert!(tree_of(vec![num("42")]).is_valid());
}

#[test]
fn test_adjacent_numbers_are_invalid() {
    let tree = tree_of(vec![num("5"), num("3")]);
    assert!(!tree.is_valid());
    assert_eq!(tree.first_invalid(), Some(tree.roots()[0]));
}

#[test]
fn test_dangling_operator_is_invalid() {
    let leading = tree_of(vec![op("-"), num("3")]);
    assert_eq!(leading.first_invalid(), Some(leading.roots()[0]));

    let trailing = tree_of(vec![num("5"), op("+")]);
    assert_eq!(trailing.first_invalid(), Some(trailing.roots()[1]));

    let doubled = tree_of(vec![num("5"), op("+"), op("*"), num("2")]);
    assert_eq!(doubled.first_invalid(), Some(doubled.roots()[1]));
}

#[test]
fn test_empty_parentheses_are_invalid() {
    let tree = tree_of(vec![group(vec![])]);
    assert_eq!(tree.first_invalid(), Some(tree.roots()[0]));
}

#[test]
fn test_nested_expression_is_valid() {
    let tree = tree_of(vec![
        num("2"),
        op("*"),
        group(vec![num("1"), op("+"), group(vec![num("4")])]),
    ]);
    assert!(tree.is_valid());
}

#[test]
fn test_invalid_child_is_reported() {
    let tree = tree_of(vec![num("2"), op("*"), group(vec![num("1"), op("+")])]);
    let parens = tree.roots()[2];
    let inner_op = tree.children(Container::Node(parens)).unwrap()[1];
    assert_eq!(tree.first_invalid(), Some(inner_op));
}

#[test]
fn test_parentheses_count_as_numbers_for_neighbors() {
    let tree = tree_of(vec![num("2"), group(vec![num("1")])]);
    assert_eq!(tree.first_invalid(), Some(tree.roots()[0]));
}

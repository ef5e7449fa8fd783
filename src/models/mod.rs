//! 数据模型层

pub mod formula_tree;
pub mod pattern_type;
pub mod serialized;
pub mod token_type;

pub use formula_tree::{
    Container, Cursor, FormulaError, FormulaTree, NodeId, Placement, RenderSlot, TokenRef,
};
pub use pattern_type::{PatternTokenType, TokenTypeRule};
pub use serialized::{formula_to_string, parse_formula, Attrs, SerializedNode};
pub use token_type::{
    default_is_valid, AfterAdd, Category, Neighborhood, NumberType, OperatorType,
    ParenthesesType, TokenType, TokenView, TypeKey, TypeRegistry, NUMBER, OPERATOR, PARENTHESES,
};

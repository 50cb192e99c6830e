use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// One entry of a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Selection::Field(field) => field.append_source(sink),
            Selection::FragmentSpread(spread) => spread.append_source(sink),
            Selection::InlineFragment(fragment) => fragment.append_source(sink),
        }
    }
}

//! Utility functions for guard linting rules

use oxc_ast::ast::{Expression, JSXAttribute, JSXAttributeName, MemberExpression, PropertyKey};

/// Check if an expression is the bare identifier `name`, ignoring parentheses
pub fn is_identifier_named(expr: &Expression, name: &str) -> bool {
    matches!(expr.without_parentheses(), Expression::Identifier(ident) if ident.name == name)
}

/// Resolve the accessed property of a member expression to a name.
///
/// Static (`a.b`), private (`a.#b`) and string-keyed computed (`a["b"]`) accesses
/// resolve; any other computed key yields `None`.
pub fn member_property_name<'n>(member: &'n MemberExpression) -> Option<&'n str> {
    match member {
        MemberExpression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        MemberExpression::PrivateFieldExpression(member) => Some(member.field.name.as_str()),
        MemberExpression::ComputedMemberExpression(member) => {
            match member.expression.without_parentheses() {
                Expression::StringLiteral(lit) => Some(lit.value.as_str()),
                _ => None,
            }
        }
    }
}

/// Resolve an object property key to a name
pub fn property_key_name<'n>(key: &'n PropertyKey) -> Option<&'n str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::PrivateIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// Get the plain name of a JSX attribute; namespaced names have none
pub fn jsx_attribute_name<'n>(attr: &'n JSXAttribute) -> Option<&'n str> {
    match &attr.name {
        JSXAttributeName::Identifier(ident) => Some(ident.name.as_str()),
        JSXAttributeName::NamespacedName(_) => None,
    }
}

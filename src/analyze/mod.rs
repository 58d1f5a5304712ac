pub mod member_expression;

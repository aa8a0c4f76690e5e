
/// A cheap check run before calculating or plotting: an expression
/// can only be complete if it ends on a digit, `x` or `)`. Anything
/// else (a trailing operator, an open function call, nothing at all)
/// is certainly incomplete.
pub fn is_complete_expression(expression: &str) -> bool {
  expression.chars()
    .next_back()
    .is_some_and(|ch| ch.is_ascii_digit() || ch == 'x' || ch == ')')
}

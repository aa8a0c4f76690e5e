
/// The precedence of an operator. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u8);

impl Precedence {
  /// Precedence of an opening parenthesis on the operator stack. Lower
  /// than every operator, so nothing ever pops past it.
  pub const GROUPING: Precedence = Precedence(0);
  pub const ADDITIVE: Precedence = Precedence(1);
  pub const MULTIPLICATIVE: Precedence = Precedence(2);
  pub const POWER: Precedence = Precedence(3);
  pub const FUNCTION: Precedence = Precedence(4);

  pub const fn value(self) -> u8 {
    self.0
  }
}

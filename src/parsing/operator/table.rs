
use super::OperatorCode;

/// One entry of the surface-form replacement table: a piece of text
/// as the user types it, and the canonical text it becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceForm {
  surface: &'static str,
  canonical: &'static str,
}

/// An ordered table of surface forms. Lookup is first-match-wins in
/// table order, NOT longest-match, so the order of entries matters:
/// `asin` must come before `sin`.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceTable {
  forms: &'static [SurfaceForm],
}

static COMMON_FORMS: [SurfaceForm; 12] = [
  SurfaceForm::new("√", "r"),
  SurfaceForm::new("asin", "S"),
  SurfaceForm::new("acos", "C"),
  SurfaceForm::new("atan", "T"),
  SurfaceForm::new("sin", "s"),
  SurfaceForm::new("cos", "c"),
  SurfaceForm::new("tan", "t"),
  SurfaceForm::new("ln", "n"),
  SurfaceForm::new("log", "l"),
  SurfaceForm::new("÷", "/"),
  SurfaceForm::new(",", "."),
  // Double negation collapse. Purely textual.
  SurfaceForm::new("-(-", "("),
];

impl SurfaceForm {
  pub const fn new(surface: &'static str, canonical: &'static str) -> Self {
    Self { surface, canonical }
  }

  pub fn surface(&self) -> &'static str {
    self.surface
  }

  pub fn canonical(&self) -> &'static str {
    self.canonical
  }

  /// The operator this form stands for, if its canonical text is a
  /// single operator code.
  pub fn operator(&self) -> Option<OperatorCode> {
    let mut chars = self.canonical.chars();
    match (chars.next(), chars.next()) {
      (Some(ch), None) => OperatorCode::from_canonical(ch),
      _ => None,
    }
  }
}

impl SurfaceTable {
  pub const fn new(forms: &'static [SurfaceForm]) -> Self {
    Self { forms }
  }

  /// The table used for ordinary user input.
  pub fn common_forms() -> Self {
    Self::new(&COMMON_FORMS)
  }

  /// Returns the first form, in table order, whose surface text is a
  /// prefix of `input`.
  pub fn find_prefix(&self, input: &str) -> Option<&'static SurfaceForm> {
    self.forms.iter().find(|form| input.starts_with(form.surface))
  }

  pub fn iter(&self) -> impl Iterator<Item = &'static SurfaceForm> {
    self.forms.iter()
  }
}

impl Default for SurfaceTable {
  fn default() -> Self {
    Self::common_forms()
  }
}

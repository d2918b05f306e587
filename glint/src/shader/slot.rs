/// Result of resolving a vertex attribute or a uniform by name.
///
/// Not every shader uses every input; an [`Slot::Absent`] input simply doesn’t receive anything.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Slot<T> {
  /// The linked program exposes the input.
  Present(T),
  /// The linked program doesn’t expose the input.
  Absent,
}

impl<T> Slot<T> {
  /// Whether the input is exposed.
  pub fn is_present(&self) -> bool {
    matches!(self, Slot::Present(_))
  }

  /// Borrow the resolved value, if any.
  pub fn as_ref(&self) -> Slot<&T> {
    match self {
      Slot::Present(t) => Slot::Present(t),
      Slot::Absent => Slot::Absent,
    }
  }

  /// Convert into an [`Option`].
  pub fn present(self) -> Option<T> {
    match self {
      Slot::Present(t) => Some(t),
      Slot::Absent => None,
    }
  }
}

impl<T> From<Option<T>> for Slot<T> {
  fn from(o: Option<T>) -> Self {
    match o {
      Some(t) => Slot::Present(t),
      None => Slot::Absent,
    }
  }
}

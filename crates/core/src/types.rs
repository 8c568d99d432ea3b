/// Identifier assigned to a character by the remote store.
///
/// The store may serialize ids as JSON numbers or numeric strings; the
/// client always normalizes them to this integer form.
pub type CharacterId = i64;

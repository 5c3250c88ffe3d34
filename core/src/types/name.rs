use nutype::nutype;

pub const MAX_NAME_LENGTH: usize = 64;

/// A loadout name. Surrounding whitespace is trimmed; the result must be
/// non-empty and at most [`MAX_NAME_LENGTH`] characters.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Name(String);

#[cfg(test)]
mod tests;

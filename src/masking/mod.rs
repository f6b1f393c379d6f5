/*!
 * Protected-span masking for translation.
 *
 * Before a document body reaches the translation backend, every span that
 * must survive translation byte-for-byte (code fences, HTML tags, inline
 * emphasis, links, mailto links, frozen terms) is replaced by an opaque
 * placeholder token. After translation the tokens are restored to the
 * original content verbatim, so translation is a no-op with respect to every
 * protected span.
 *
 * Submodules:
 * - `token`: placeholder tokens and the insertion-ordered span map
 * - `rules`: span kinds, compiled patterns and the fixed pass order
 * - `mask`: the two pure functions, mask and unmask
 */

pub use self::mask::SpanMasker;
pub use self::rules::MaskRule;
pub use self::token::{ProtectedSpan, SpanKind, SpanMap};

pub mod mask;
pub mod rules;
pub mod token;

#![forbid(unsafe_code)]

use uuid::Uuid;

// ***************************************************************************
//                                  Traits
// ***************************************************************************
// ---------------------------------------------------------------------------
// IdSource:
// ---------------------------------------------------------------------------
/** A source of unique request identifiers.  The endpoint receives its source
 * by injection so tests can substitute a deterministic implementation and
 * assert exact response bodies.
 */
pub trait IdSource: Send + Sync {
    /// Return a new identifier in canonical 36-character hyphenated form.
    fn next_id(&self) -> String;
}

// ***************************************************************************
//                             Implementations
// ***************************************************************************
// ---------------------------------------------------------------------------
// RandomIdSource:
// ---------------------------------------------------------------------------
/** The production source: random version 4 uuids drawn from the process-wide
 * entropy source.  Collisions are statistically negligible; no ordering is
 * guaranteed between successive values.
 */
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().as_hyphenated().to_string()
    }
}

#![forbid(unsafe_code)]

// ***************************************************************************
//                                Constants
// ***************************************************************************
/// The fixed greeting literal served on stdout at startup and in every
/// HTTP response body.
pub const GREETING : &str = "Hello, World!";

// ***************************************************************************
// GENERAL PUBLIC FUNCTIONS
// ***************************************************************************
// ---------------------------------------------------------------------------
// compose_greeting:
// ---------------------------------------------------------------------------
/** Build the response payload: the greeting literal immediately followed by
 * the supplied identifier, with no separator.
 */
pub fn compose_greeting(id: &str) -> String {
    format!("{}{}", GREETING, id)
}

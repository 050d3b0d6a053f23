//! Address locality matching
//!
//! Korean administrative addresses start with province/metropolitan city and
//! district ("서울특별시 강남구 ..."). Street-level detail is formatted
//! inconsistently between registries, so only those two leading tokens are
//! compared.

/// Number of leading address tokens that identify a locality
pub const LOCALITY_DEPTH: usize = 2;

/// The province/city and district tokens of `address`, or `None` when the
/// address has fewer than two whitespace-delimited tokens.
pub fn locality_tokens(address: &str) -> Option<[&str; LOCALITY_DEPTH]> {
    let mut tokens = address.split_whitespace();
    Some([tokens.next()?, tokens.next()?])
}

/// Decide whether a license registered at `registered_address` may belong to
/// the place the caller picked at `query_address`.
///
/// Fails open: no query address, or too few tokens on either side, counts as
/// a match.
pub fn is_locality_match(query_address: Option<&str>, registered_address: &str) -> bool {
    let Some(query_address) = query_address else {
        return true;
    };

    match (locality_tokens(query_address), locality_tokens(registered_address)) {
        (Some(query), Some(registered)) => query == registered,
        _ => true,
    }
}

/// Count of leading locality tokens the two addresses share (0 to 2).
pub fn shared_locality_tokens(a: &str, b: &str) -> usize {
    a.split_whitespace()
        .zip(b.split_whitespace())
        .take(LOCALITY_DEPTH)
        .take_while(|(x, y)| x == y)
        .count()
}

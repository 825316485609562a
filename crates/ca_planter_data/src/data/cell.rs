/// Inactive cell value.
pub const DEAD: u8 = 0;
/// Active cell value.
pub const ALIVE: u8 = 1;

#[inline]
pub fn is_binary(value: u8) -> bool {
    value == DEAD || value == ALIVE
}

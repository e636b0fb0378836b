//! Standard single-elimination seeding table.

/// Seed order for round-1 slots of a power-of-two bracket.
///
/// Slot pair `(order[2i], order[2i + 1])` is round-1 match `i`. Seed `s` always meets
/// `bracket_size + 1 - s` first, so the top two seeds can only meet in the final and
/// empty seeds (greater than the field) land opposite the highest seeds.
pub fn seeding_order(bracket_size: usize) -> Vec<u32> {
    let mut order = vec![1u32];
    while order.len() < bracket_size {
        let next = (order.len() * 2) as u32;
        order = order.iter().flat_map(|&s| [s, next + 1 - s]).collect();
    }
    order
}
